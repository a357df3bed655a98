//! Worked-hours and lateness formatting for attendance reports.
//!
//! Both calculators work on wall-clock strings (`HH:mm`) reduced to minutes
//! since midnight, so they never depend on dates or time zones. Callers are
//! expected to bring both inputs into the same zone first.
//!
//! ## Format Specifications
//!
//! ### Worked duration
//! - `"{h}h {m}m"`, hours are not padded: 9 hours 5 minutes → `"9h 5m"`
//! - A single scan (start == end) → `"0h 0m"`
//! - End before start is shown as a negative magnitude: `"-1h 30m"`
//! - Missing or unparsable input → empty string
//!
//! ### Lateness
//! - Under one hour → `"Late (15min)"`
//! - One hour or more → `"Late (1h 5min)"`
//! - Arriving before the threshold → no text
//! - Missing or unparsable input → no text
//!
//! ## Examples
//!
//! ```rust
//! use hrdesk::libs::formatter::{calc_lateness, calc_work_duration};
//!
//! assert_eq!(calc_work_duration(Some("08:05"), Some("17:10")), "9h 5m");
//! assert_eq!(calc_lateness(Some("09:15"), Some("09:30")), Some("Late (15min)".to_string()));
//! assert_eq!(calc_lateness(Some("09:15"), Some("08:05")), None);
//! ```

use super::time::minutes_since_midnight;

/// Formats a signed minute count as `"{h}h {m}m"`.
///
/// Negative values keep the sign in front and render the magnitude, so that
/// a reversed pair of scans is visible instead of silently wrapping.
pub fn format_minutes(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let magnitude = minutes.abs();
    format!("{}{}h {}m", sign, magnitude / 60, magnitude % 60)
}

/// Elapsed time between the first and last scan of a day.
///
/// # Arguments
///
/// * `start` - First scan of the day, `HH:mm`
/// * `end` - Last scan of the day, `HH:mm`
///
/// # Returns
///
/// `"{h}h {m}m"`, or an empty string when either input is missing or
/// cannot be parsed.
pub fn calc_work_duration(start: Option<&str>, end: Option<&str>) -> String {
    let (Some(start), Some(end)) = (start, end) else {
        return String::new();
    };

    match (minutes_since_midnight(start), minutes_since_midnight(end)) {
        (Some(start), Some(end)) => format_minutes(end - start),
        _ => String::new(),
    }
}

/// Lateness of a scan against the nominal start-of-day threshold.
///
/// Returns `None` when the employee arrived before the threshold, and when
/// either input is missing or malformed. Arriving exactly on the threshold
/// counts as `"Late (0min)"`.
pub fn calc_lateness(threshold: Option<&str>, scan_time: Option<&str>) -> Option<String> {
    let threshold = minutes_since_midnight(threshold?)?;
    let scan = minutes_since_midnight(scan_time?)?;

    let diff = scan - threshold;
    if diff < 0 {
        return None;
    }

    let (hours, minutes) = (diff / 60, diff % 60);
    if hours >= 1 {
        Some(format!("Late ({}h {}min)", hours, minutes))
    } else {
        Some(format!("Late ({}min)", minutes))
    }
}
