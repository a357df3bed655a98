use super::connect;
use crate::{
    libs::{
        attendance::{daily_history, Employee},
        messages::Message,
        pagination::{paginate, total_pages, PAGE_SIZE},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Page to show, newest days first
    #[arg(short, long, default_value_t = 1)]
    page: usize,
}

pub async fn cmd(args: HistoryArgs) -> Result<()> {
    let conn = connect()?;
    let session = conn.session.require()?;
    let ctx = conn.session.context()?;
    let rules = conn.config.report_rules()?;

    let events = conn.session.guard(conn.client.user_attendances(&ctx, session.id).await)?;
    let employee = Employee {
        id: session.id,
        name: session.name,
    };
    let days = daily_history(&events, &employee);
    if days.is_empty() {
        msg_info!(Message::NoAttendanceRecords);
        return Ok(());
    }

    msg_print!(Message::HistoryHeader(employee.name), true);
    View::daily(paginate(&days, args.page, PAGE_SIZE), &rules).printstd();
    msg_print!(Message::PageInfo(args.page, total_pages(days.len(), PAGE_SIZE)));
    Ok(())
}
