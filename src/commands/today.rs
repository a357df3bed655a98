use super::connect;
use crate::{
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;

pub async fn cmd() -> Result<()> {
    let conn = connect()?;
    let ctx = conn.session.context()?;
    let rules = conn.config.report_rules()?;

    let events = conn.session.guard(conn.client.today_attendance(&ctx).await)?;
    if events.is_empty() {
        msg_info!(Message::NoAttendanceToday);
        return Ok(());
    }

    msg_print!(Message::TodayHeader(Local::now().format("%B %-d, %Y").to_string()), true);
    View::events(&events, rules.zone).printstd();
    Ok(())
}
