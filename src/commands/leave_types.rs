use super::connect;
use crate::{
    libs::{
        messages::Message,
        pagination::{paginate, total_pages, PAGE_SIZE},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LeaveTypesArgs {
    /// Page to show
    #[arg(short, long, default_value_t = 1)]
    page: usize,
}

pub async fn cmd(args: LeaveTypesArgs) -> Result<()> {
    let conn = connect()?;
    conn.session.require_management()?;
    let ctx = conn.session.context()?;

    let leave_types = conn.session.guard(conn.client.leave_types(&ctx).await)?;
    if leave_types.is_empty() {
        msg_info!(Message::NothingFound);
        return Ok(());
    }

    View::leave_types(paginate(&leave_types, args.page, PAGE_SIZE)).printstd();
    msg_print!(Message::PageInfo(args.page, total_pages(leave_types.len(), PAGE_SIZE)));
    Ok(())
}
