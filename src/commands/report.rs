//! Employee attendance report.
//!
//! Without explicit bounds the backend picks the range and the table shows
//! the dates of the current month, like the report page of the web client.
//! With `--start`/`--end` every requested day is listed, absences included.

use super::{connect, Connection, ReportFilterArgs};
use crate::{
    libs::{
        attendance::{fill_range, filter_by_name, AttendanceSheet, DateRange},
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    filter: ReportFilterArgs,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let conn = connect()?;
    let range = args.filter.range()?;
    let sheet = fetch_sheet(&conn, &range, args.filter.search.as_deref()).await?;

    let sheet = if range.start.is_none() && range.end.is_none() {
        sheet.with_dates(sheet.dates_in_month(Local::now().date_naive()))
    } else {
        sheet
    };

    if sheet.is_empty() {
        msg_info!(Message::NoAttendanceRecords);
        return Ok(());
    }

    let bound = |date: Option<chrono::NaiveDate>| date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
    msg_print!(Message::ReportHeader(bound(range.start), bound(range.end)), true);
    View::attendance_sheet(&sheet).printstd();
    Ok(())
}

/// Loads the report for `range` and turns it into a sheet. Management only.
pub async fn fetch_sheet(conn: &Connection, range: &DateRange, search: Option<&str>) -> Result<AttendanceSheet> {
    conn.session.require_management()?;
    let ctx = conn.session.context()?;
    let rules = conn.config.report_rules()?;

    let reports = conn.session.guard(conn.client.employee_attendances(&ctx, range).await)?;
    let mut reports = filter_by_name(&reports, search);
    for report in &mut reports {
        fill_range(report, range);
    }
    tracing::debug!(employees = reports.len(), "employee attendance loaded");

    Ok(AttendanceSheet::build(&reports, &rules))
}
