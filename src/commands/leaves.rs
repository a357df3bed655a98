//! Leave request review.
//!
//! Listing is open to every signed-in user; the backend scopes the list to
//! what the account may see. Approving and rejecting need a management account.

use super::connect;
use crate::{
    api::leaves::{LeaveStatus, LeaveStatusRequest},
    libs::{
        messages::Message,
        pagination::{paginate, total_pages, PAGE_SIZE},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct LeavesArgs {
    #[command(subcommand)]
    command: LeavesCommand,
}

#[derive(Debug, Subcommand)]
enum LeavesCommand {
    /// List leave requests
    List {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Only requests with this status
        #[arg(long, value_enum)]
        status: Option<LeaveStatus>,
    },
    /// Approve a leave request
    Approve {
        id: i64,
        #[arg(long)]
        remark: Option<String>,
    },
    /// Reject a leave request
    Reject {
        id: i64,
        #[arg(long)]
        remark: Option<String>,
    },
}

pub async fn cmd(args: LeavesArgs) -> Result<()> {
    let conn = connect()?;
    let ctx = conn.session.context()?;

    let (id, status, remark) = match args.command {
        LeavesCommand::List { page, status } => {
            let mut leaves = conn.session.guard(conn.client.leaves(&ctx).await)?;
            if let Some(status) = status {
                leaves.retain(|leave| leave.status == status);
            }
            if leaves.is_empty() {
                msg_info!(Message::NothingFound);
                return Ok(());
            }
            View::leaves(paginate(&leaves, page, PAGE_SIZE)).printstd();
            msg_print!(Message::PageInfo(page, total_pages(leaves.len(), PAGE_SIZE)));
            return Ok(());
        }
        LeavesCommand::Approve { id, remark } => (id, LeaveStatus::Approved, remark),
        LeavesCommand::Reject { id, remark } => (id, LeaveStatus::Rejected, remark),
    };

    conn.session.require_management()?;
    let request = LeaveStatusRequest { status, remark };
    let response = conn.session.guard(conn.client.update_leave_status(&ctx, id, &request).await)?;
    msg_success!(Message::LeaveStatusChanged(response.id, response.status.to_string()));
    Ok(())
}
