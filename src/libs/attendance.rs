//! Attendance aggregation: from scan events to per-employee, per-day cells.
//!
//! Provides the read models behind the attendance report. Raw scan events
//! (or the report payload the backend already groups by employee and day)
//! are turned into an [`AttendanceSheet`]: one row per employee, one column
//! group per date, and a [`DayCell`] at every intersection.
//!
//! ## Day policy
//!
//! - No scan times → [`DayCell::Absent`]
//! - One scan time → that time, `"0h 0m"` worked, lateness of that scan
//! - Two or more → first and second time shown, worked hours from the first
//!   to the last scan, lateness of the first scan
//!
//! Scan times are sorted chronologically before any of the above is applied,
//! so the payload order coming from the backend does not matter.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hrdesk::libs::attendance::{AttendanceSheet, EmployeeAttendanceReport, ReportRules};
//!
//! let reports: Vec<EmployeeAttendanceReport> = Vec::new();
//! let sheet = AttendanceSheet::build(&reports, &ReportRules::default());
//! assert!(sheet.is_empty());
//! ```

use super::formatter::{calc_lateness, calc_work_duration};
use super::time::{format_late_time, format_scan_time, minutes_since_midnight, DisplayZone};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Marker written for a day without any scan.
pub const ABSENCE_MARKER: &str = "❌";

/// Nominal start of the working day.
pub const DEFAULT_LATE_THRESHOLD: &str = "09:15";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceType {
    CheckIn,
    CheckOut,
}

impl AttendanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceType::CheckIn => "check_in",
            AttendanceType::CheckOut => "check_out",
        }
    }
}

/// A single check-in or check-out as recorded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub user_id: i64,
    pub date: NaiveDate,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: AttendanceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_info: Option<String>,
    #[serde(deserialize_with = "coordinate")]
    pub latitude: f64,
    #[serde(deserialize_with = "coordinate")]
    pub longitude: f64,
}

/// Decimal columns arrive either as JSON numbers or as numeric strings.
fn coordinate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
}

/// Scan times of one employee on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendance {
    pub date: NaiveDate,
    #[serde(default)]
    pub times: Vec<String>,
}

/// Report payload entry: one employee and their days in the requested range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAttendanceReport {
    pub employee: Employee,
    #[serde(default)]
    pub attendance_list: Vec<DailyAttendance>,
}

/// Inclusive date range used both for the report query and the export file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Every day of the range, when both bounds are known and ordered.
    pub fn days(&self) -> Vec<NaiveDate> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start <= end => {
                let span = (end - start).num_days();
                (0..=span).map(|offset| start + Duration::days(offset)).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Settings that turn scan times into display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRules {
    pub late_threshold: String,
    pub zone: DisplayZone,
}

impl Default for ReportRules {
    fn default() -> Self {
        Self {
            late_threshold: DEFAULT_LATE_THRESHOLD.to_string(),
            zone: DisplayZone::Local,
        }
    }
}

/// Sorts scan times chronologically; unparsable entries keep their relative order at the end.
pub fn sort_times(times: &[String]) -> Vec<String> {
    let mut sorted = times.to_vec();
    sorted.sort_by_key(|t| minutes_since_midnight(t).unwrap_or(i64::MAX));
    sorted
}

/// Groups flat scan events by employee and calendar day.
///
/// Employees are emitted in the order given; events of an employee missing
/// from `employees` are appended afterwards under a placeholder name.
pub fn group_events(events: &[AttendanceEvent], employees: &[Employee]) -> Vec<EmployeeAttendanceReport> {
    let mut by_user: BTreeMap<i64, BTreeMap<NaiveDate, Vec<String>>> = BTreeMap::new();
    for event in events {
        by_user
            .entry(event.user_id)
            .or_default()
            .entry(event.date)
            .or_default()
            .push(event.time.clone());
    }

    let to_list = |days: BTreeMap<NaiveDate, Vec<String>>| {
        days.into_iter()
            .map(|(date, times)| DailyAttendance {
                date,
                times: sort_times(&times),
            })
            .collect::<Vec<_>>()
    };

    let mut reports: Vec<EmployeeAttendanceReport> = employees
        .iter()
        .map(|employee| EmployeeAttendanceReport {
            employee: employee.clone(),
            attendance_list: by_user.remove(&employee.id).map(to_list).unwrap_or_default(),
        })
        .collect();

    for (user_id, days) in by_user {
        reports.push(EmployeeAttendanceReport {
            employee: Employee {
                id: user_id,
                name: format!("Employee #{}", user_id),
            },
            attendance_list: to_list(days),
        });
    }

    reports
}

/// Days on which `employee` scanned, newest first.
pub fn daily_history(events: &[AttendanceEvent], employee: &Employee) -> Vec<DailyAttendance> {
    let mut days = group_events(events, std::slice::from_ref(employee))
        .into_iter()
        .next()
        .map(|report| report.attendance_list)
        .unwrap_or_default();
    days.reverse();
    days
}

/// Adds an empty day for every date of `range` the report does not mention yet.
pub fn fill_range(report: &mut EmployeeAttendanceReport, range: &DateRange) {
    let known: BTreeSet<NaiveDate> = report.attendance_list.iter().map(|day| day.date).collect();
    for date in range.days() {
        if !known.contains(&date) {
            report.attendance_list.push(DailyAttendance { date, times: Vec::new() });
        }
    }
    report.attendance_list.sort_by_key(|day| day.date);
}

/// Keeps reports whose employee name contains `search`, ignoring case.
pub fn filter_by_name(reports: &[EmployeeAttendanceReport], search: Option<&str>) -> Vec<EmployeeAttendanceReport> {
    match search.map(str::trim).filter(|s| !s.is_empty()) {
        None => reports.to_vec(),
        Some(search) => {
            let needle = search.to_lowercase();
            reports
                .iter()
                .filter(|report| report.employee.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
    }
}

/// What a single employee-day renders as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DayCell {
    Absent,
    Present {
        scan_time: String,
        hour: String,
        remark: String,
    },
}

impl DayCell {
    pub fn from_daily(day: &DailyAttendance, rules: &ReportRules) -> Self {
        let times = sort_times(&day.times);
        let (Some(first), Some(last)) = (times.first(), times.last()) else {
            return DayCell::Absent;
        };

        let scan_time = match times.get(1) {
            Some(second) => format!(
                "{},\n{}",
                format_scan_time(first, day.date, rules.zone),
                format_scan_time(second, day.date, rules.zone)
            ),
            None => format_scan_time(first, day.date, rules.zone),
        };
        let hour = calc_work_duration(Some(first), Some(last));
        let local_first = format_late_time(first, day.date, rules.zone);
        let remark = calc_lateness(Some(&rules.late_threshold), Some(&local_first)).unwrap_or_default();

        DayCell::Present { scan_time, hour, remark }
    }

    /// Scan time, hour and remark text, or `None` for an absence.
    ///
    /// A present cell with nothing to show is treated like an absence.
    pub fn texts(&self) -> Option<[&str; 3]> {
        match self {
            DayCell::Present { scan_time, hour, remark } if !(scan_time.is_empty() && hour.is_empty() && remark.is_empty()) => {
                Some([scan_time.as_str(), hour.as_str(), remark.as_str()])
            }
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.texts().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetRow {
    pub no: i64,
    pub name: String,
    pub cells: BTreeMap<NaiveDate, DayCell>,
}

impl SheetRow {
    pub fn cell(&self, date: &NaiveDate) -> DayCell {
        self.cells.get(date).cloned().unwrap_or(DayCell::Absent)
    }
}

/// Render-ready attendance grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceSheet {
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<SheetRow>,
}

impl AttendanceSheet {
    /// Builds the sheet. Header dates are the sorted union of all dates seen
    /// in any report; every row holds a cell for every header date, and a
    /// date the employee has no entry for is absent.
    pub fn build(reports: &[EmployeeAttendanceReport], rules: &ReportRules) -> Self {
        let dates: BTreeSet<NaiveDate> = reports
            .iter()
            .flat_map(|report| report.attendance_list.iter().map(|day| day.date))
            .collect();

        let rows = reports
            .iter()
            .map(|report| {
                let mut cells: BTreeMap<NaiveDate, DayCell> = report
                    .attendance_list
                    .iter()
                    .map(|day| (day.date, DayCell::from_daily(day, rules)))
                    .collect();
                for date in &dates {
                    cells.entry(*date).or_insert(DayCell::Absent);
                }
                SheetRow {
                    no: report.employee.id,
                    name: report.employee.name.clone(),
                    cells,
                }
            })
            .collect();

        Self {
            dates: dates.into_iter().collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.dates.is_empty()
    }

    /// Header dates falling into the same month as `reference`.
    pub fn dates_in_month(&self, reference: NaiveDate) -> Vec<NaiveDate> {
        self.dates
            .iter()
            .copied()
            .filter(|date| date.year() == reference.year() && date.month() == reference.month())
            .collect()
    }

    /// Copy of the sheet restricted to the given header dates.
    pub fn with_dates(&self, dates: Vec<NaiveDate>) -> Self {
        Self {
            dates,
            rows: self.rows.clone(),
        }
    }
}

/// Column-group label of a date, e.g. `Mar 03 (Mon)`.
pub fn date_label(date: &NaiveDate) -> String {
    date.format("%b %d (%a)").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_days_are_inclusive() {
        let start = NaiveDate::from_ymd_opt(2025, 2, 27).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(DateRange::new(Some(start), Some(end)).days().len(), 4);
        assert!(DateRange::new(Some(end), Some(start)).days().is_empty());
        assert!(DateRange::new(None, Some(end)).days().is_empty());
    }

    #[test]
    fn label_uses_short_month_and_weekday() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(date_label(&date), "Mar 03 (Mon)");
    }

    #[test]
    fn coordinates_accept_strings() {
        let event: AttendanceEvent = serde_json::from_str(
            r#"{"user_id":1,"date":"2025-03-03","time":"02:00","type":"check_in","latitude":"16.8","longitude":96.1}"#,
        )
        .unwrap();
        assert_eq!(event.latitude, 16.8);
        assert_eq!(event.kind, AttendanceType::CheckIn);
    }
}
