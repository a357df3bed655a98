use super::connect;
use crate::{
    api::{positions::Position, ApiClient, ApiResult, RequestContext, StatusResponse},
    libs::{
        messages::Message,
        optimistic::{self, update_where},
        pagination::{paginate, total_pages, PAGE_SIZE},
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct PositionsArgs {
    #[command(subcommand)]
    command: PositionsCommand,
}

#[derive(Debug, Subcommand)]
enum PositionsCommand {
    /// List positions
    List {
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Activate or deactivate a position
    Toggle { id: i64 },
}

pub async fn cmd(args: PositionsArgs) -> Result<()> {
    let conn = connect()?;
    conn.session.require_management()?;
    let ctx = conn.session.context()?;

    match args.command {
        PositionsCommand::List { page } => {
            let positions = conn.session.guard(conn.client.positions(&ctx).await)?;
            if positions.is_empty() {
                msg_info!(Message::NothingFound);
                return Ok(());
            }
            View::positions(paginate(&positions, page, PAGE_SIZE)).printstd();
            msg_print!(Message::PageInfo(page, total_pages(positions.len(), PAGE_SIZE)));
        }
        PositionsCommand::Toggle { id } => {
            let mut positions = conn.session.guard(conn.client.positions(&ctx).await)?;
            let name = positions
                .iter()
                .find(|position| position.id == id)
                .map(|position| position.name.clone())
                .ok_or_else(|| msg_error_anyhow!(Message::NothingFound))?;

            let result = toggle_position(&conn.client, &ctx, &mut positions, id).await;
            View::positions(&positions).printstd();
            let response = conn.session.guard(result)?;
            msg_success!(Message::PositionStatusChanged(name, response.is_active));
        }
    }

    Ok(())
}

/// Flips the status of position `id` in `positions` and sends the new status
/// to the backend. A failed request leaves `positions` as it was.
pub async fn toggle_position(
    client: &ApiClient,
    ctx: &RequestContext,
    positions: &mut Vec<Position>,
    id: i64,
) -> ApiResult<StatusResponse> {
    let is_active = positions.iter().find(|p| p.id == id).map_or(false, |p| p.is_active);
    optimistic::apply(
        positions,
        update_where(id, |p: &Position| p.id, |p: &mut Position| p.is_active = !p.is_active),
        client.set_position_status(ctx, id, !is_active),
    )
    .await
}
