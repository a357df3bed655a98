use super::attendance::{
    date_label, AttendanceEvent, AttendanceSheet, DailyAttendance, DayCell, ReportRules, ABSENCE_MARKER,
};
use super::export::SUB_HEADERS;
use super::time::{format_scan_time, DisplayZone};
use crate::api::leave_types::LeaveType;
use crate::api::leaves::Leave;
use crate::api::positions::Position;
use crate::api::users::User;
use prettytable::{row, Cell, Row, Table};

/// Console tables for the list commands.
pub struct View {}

impl View {
    /// Report grid: each date spans its three sub-columns.
    pub fn attendance_sheet(sheet: &AttendanceSheet) -> Table {
        let mut table = Table::new();

        let mut header = vec![Cell::new("No."), Cell::new("Employee Name")];
        let mut sub_header = vec![Cell::new(""), Cell::new("")];
        for date in &sheet.dates {
            header.push(Cell::new(&date_label(date)).with_hspan(3));
            sub_header.extend(SUB_HEADERS.iter().map(|title| Cell::new(title)));
        }
        table.set_titles(Row::new(header));
        table.add_row(Row::new(sub_header));

        for row in &sheet.rows {
            let mut cells = vec![Cell::new(&row.no.to_string()), Cell::new(&row.name)];
            for date in &sheet.dates {
                match row.cell(date).texts() {
                    Some(texts) => cells.extend(texts.iter().map(|text| Cell::new(text))),
                    None => cells.push(Cell::new(ABSENCE_MARKER).with_hspan(3)),
                }
            }
            table.add_row(Row::new(cells));
        }

        table
    }

    /// One line per day with its scans, worked hours and lateness.
    pub fn daily(days: &[DailyAttendance], rules: &ReportRules) -> Table {
        let mut table = Table::new();
        table.set_titles(row!["DATE", "SCAN TIME", "HOUR", "REMARK"]);
        for day in days {
            let date = day.date.format("%Y-%m-%d");
            match DayCell::from_daily(day, rules).texts() {
                Some([scan_time, hour, remark]) => table.add_row(row![date, scan_time, hour, remark]),
                None => table.add_row(row![date, ABSENCE_MARKER, "", ""]),
            };
        }
        table
    }

    /// Individual scans, shown in the display zone.
    pub fn events(events: &[AttendanceEvent], zone: DisplayZone) -> Table {
        let mut table = Table::new();
        table.set_titles(row!["DATE", "TIME", "TYPE", "DEVICE"]);
        for event in events {
            table.add_row(row![
                event.date.format("%Y-%m-%d"),
                format_scan_time(&event.time, event.date, zone),
                event.kind.as_str(),
                event.device_info.as_deref().unwrap_or("")
            ]);
        }
        table
    }

    pub fn users(users: &[User]) -> Table {
        let mut table = Table::new();
        table.set_titles(row!["ID", "NAME", "USERNAME", "ROLE", "POSITION", "ACTIVE"]);
        for user in users {
            table.add_row(row![
                user.id,
                user.name,
                user.username,
                user.user_role,
                user.position.as_ref().map(|p| p.name.as_str()).unwrap_or(""),
                if user.is_active { "yes" } else { "no" }
            ]);
        }
        table
    }

    pub fn user_detail(user: &User) -> Table {
        let mut table = Table::new();
        let value = |v: &Option<String>| v.clone().unwrap_or_default();
        table.add_row(row!["ID", user.id]);
        table.add_row(row!["Name", user.name]);
        table.add_row(row!["Username", user.username]);
        table.add_row(row!["Role", user.user_role]);
        table.add_row(row!["Position", user.position.as_ref().map(|p| p.name.clone()).unwrap_or_default()]);
        table.add_row(row!["Gender", value(&user.gender)]);
        table.add_row(row!["Email", value(&user.email)]);
        table.add_row(row!["Phone", value(&user.phone)]);
        table.add_row(row!["Address", value(&user.address)]);
        table.add_row(row!["Date of birth", value(&user.dob)]);
        table.add_row(row!["Joined", value(&user.start_join_date)]);
        table.add_row(row!["Bank accounts", value(&user.bank_accounts)]);
        table.add_row(row!["Active", if user.is_active { "yes" } else { "no" }]);
        table
    }

    pub fn positions(positions: &[Position]) -> Table {
        let mut table = Table::new();
        table.set_titles(row!["ID", "NAME", "ACTIVE"]);
        for position in positions {
            table.add_row(row![position.id, position.name, if position.is_active { "yes" } else { "no" }]);
        }
        table
    }

    pub fn leave_types(leave_types: &[LeaveType]) -> Table {
        let mut table = Table::new();
        table.set_titles(row!["ID", "LEAVE TYPE"]);
        for leave_type in leave_types {
            table.add_row(row![leave_type.id, leave_type.leave_type]);
        }
        table
    }

    pub fn leaves(leaves: &[Leave]) -> Table {
        let mut table = Table::new();
        table.set_titles(row!["ID", "EMPLOYEE", "TYPE", "FROM", "TO", "DAYS", "REASON", "STATUS", "REMARK"]);
        for leave in leaves {
            table.add_row(row![
                leave.id,
                leave.user.as_ref().map(|u| u.name.clone()).unwrap_or_else(|| format!("#{}", leave.user_id)),
                leave
                    .leave_type
                    .as_ref()
                    .map(|t| t.leave_type.clone())
                    .unwrap_or_else(|| format!("#{}", leave.leave_type_id)),
                leave.leave_from,
                leave.leave_to,
                leave.total_days,
                leave.reason,
                leave.status,
                leave.remark.as_deref().unwrap_or("")
            ]);
        }
        table
    }
}
