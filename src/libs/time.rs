//! Wall-clock time parsing and display-zone conversion for scan times.
//!
//! The backend stores every scan as a bare `HH:mm` string in UTC next to the
//! calendar date it belongs to. This module turns those strings into values
//! that can be displayed in the operator's zone or compared arithmetically.
//!
//! ## Conversions
//!
//! - [`format_scan_time`]: UTC `HH:mm` → display zone, 12-hour `hh:mm AM`
//! - [`format_late_time`]: UTC `HH:mm` → display zone, 24-hour `HH:mm`
//! - [`minutes_since_midnight`]: `HH:mm` → `hours * 60 + minutes`
//!
//! Malformed input never produces an error. Display helpers return
//! [`INVALID_DATE`] and the arithmetic helpers return `None`.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hrdesk::libs::time::{format_scan_time, DisplayZone};
//!
//! let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
//! let zone: DisplayZone = "+06:30".parse().unwrap();
//! assert_eq!(format_scan_time("02:15", date, zone), "08:45 AM");
//! ```

use anyhow::{bail, Result};
use chrono::{FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Text shown in place of a time that could not be parsed.
pub const INVALID_DATE: &str = "Invalid date";

/// Time zone scan times are rendered in.
///
/// `Local` resolves to the zone of the machine running the command, which is
/// what the web client did with its guessed browser zone. `Fixed` pins the
/// display to an explicit UTC offset so reports look the same everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub fn utc() -> Self {
        DisplayZone::Fixed(Utc.fix())
    }

    /// Converts a naive UTC timestamp into wall-clock time of this zone.
    pub fn from_utc(&self, utc: NaiveDateTime) -> NaiveDateTime {
        match self {
            DisplayZone::Local => Local.from_utc_datetime(&utc).naive_local(),
            DisplayZone::Fixed(offset) => offset.from_utc_datetime(&utc).naive_local(),
        }
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayZone::Local => write!(f, "local"),
            DisplayZone::Fixed(offset) if offset.local_minus_utc() == 0 => write!(f, "utc"),
            DisplayZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl FromStr for DisplayZone {
    type Err = anyhow::Error;

    /// Accepts `local`, `utc`, or a signed offset such as `+06:30` / `-0500`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "local" | "" => return Ok(DisplayZone::Local),
            "utc" | "z" => return Ok(DisplayZone::utc()),
            _ => {}
        }

        let (sign, rest) = match s.chars().next() {
            Some('+') => (1, &s[1..]),
            Some('-') => (-1, &s[1..]),
            _ => bail!("Invalid time zone '{}': expected local, utc or an offset like +06:30", s),
        };
        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            bail!("Invalid time zone offset '{}'", s);
        }
        let hours: i32 = digits[..2].parse()?;
        let minutes: i32 = digits[2..].parse()?;
        if hours > 14 || minutes > 59 {
            bail!("Time zone offset '{}' is out of range", s);
        }

        match FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)) {
            Some(offset) => Ok(DisplayZone::Fixed(offset)),
            None => bail!("Time zone offset '{}' is out of range", s),
        }
    }
}

impl Serialize for DisplayZone {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DisplayZone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses `H:mm`, `HH:mm` or `HH:mm:ss`.
pub fn parse_hhmm(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()
}

/// `hours * 60 + minutes` of a wall-clock string, seconds ignored.
pub fn minutes_since_midnight(time: &str) -> Option<i64> {
    parse_hhmm(time).map(|t| t.hour() as i64 * 60 + t.minute() as i64)
}

fn to_display(time: &str, date: NaiveDate, zone: DisplayZone) -> Option<NaiveDateTime> {
    parse_hhmm(time).map(|t| zone.from_utc(NaiveDateTime::new(date, t)))
}

/// Renders a stored UTC scan time as 12-hour wall-clock time in `zone`.
pub fn format_scan_time(time: &str, date: NaiveDate, zone: DisplayZone) -> String {
    to_display(time, date, zone)
        .map(|dt| dt.format("%I:%M %p").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Renders a stored UTC scan time as 24-hour wall-clock time in `zone`.
///
/// This is the form the lateness threshold is compared against.
pub fn format_late_time(time: &str, date: NaiveDate, zone: DisplayZone) -> String {
    to_display(time, date, zone)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}
