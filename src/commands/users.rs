//! User administration for management accounts.

use super::connect;
use crate::{
    api::{users::User, ApiClient, ApiResult, RequestContext, StatusResponse},
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
use dialoguer::{theme::ColorfulTheme, Password};

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    command: UsersCommand,
}

#[derive(Debug, Subcommand)]
enum UsersCommand {
    /// List users
    List {
        /// Page to show
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Only users whose name or username contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one user
    Show { id: i64 },
    /// Activate or deactivate a user
    Toggle { id: i64 },
    /// Set a new password for a user
    ResetPassword { id: i64 },
}

pub async fn cmd(args: UsersArgs) -> Result<()> {
    let conn = connect()?;
    conn.session.require_management()?;
    let ctx = conn.session.context()?;

    match args.command {
        UsersCommand::List { page, search } => {
            let users = conn.session.guard(conn.client.users(&ctx).await)?;
            let users = filter_users(users, search.as_deref());
            if users.is_empty() {
                msg_info!(Message::NothingFound);
                return Ok(());
            }
            View::users(paginate(&users, page, PAGE_SIZE)).printstd();
            msg_print!(Message::PageInfo(page, total_pages(users.len(), PAGE_SIZE)));
        }
        UsersCommand::Show { id } => {
            let user = conn.session.guard(conn.client.user(&ctx, id).await)?;
            View::user_detail(&user).printstd();
        }
        UsersCommand::Toggle { id } => {
            let mut users = conn.session.guard(conn.client.users(&ctx).await)?;
            let name = users
                .iter()
                .find(|user| user.id == id)
                .map(|user| user.name.clone())
                .ok_or_else(|| msg_error_anyhow!(Message::NothingFound))?;

            let result = toggle_user(&conn.client, &ctx, &mut users, id).await;
            // Restored on failure
            View::users(&users).printstd();
            let response = conn.session.guard(result)?;
            msg_success!(Message::UserStatusChanged(name, response.is_active));
        }
        UsersCommand::ResetPassword { id } => {
            let user = conn.session.guard(conn.client.user(&ctx, id).await)?;
            let new_password = Password::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptNewPassword.to_string())
                .with_confirmation(Message::PromptConfirmPassword.to_string(), Message::PasswordMismatch.to_string())
                .interact()?;
            conn.session.guard(conn.client.reset_password(&ctx, id, &new_password).await)?;
            msg_success!(Message::PasswordReset(user.name));
        }
    }

    Ok(())
}

/// Flips the status of user `id` in `users` and sends the new status to the
/// backend. A failed request leaves `users` as it was.
pub async fn toggle_user(
    client: &ApiClient,
    ctx: &RequestContext,
    users: &mut Vec<User>,
    id: i64,
) -> ApiResult<StatusResponse> {
    let is_active = users.iter().find(|user| user.id == id).map_or(false, |user| user.is_active);
    optimistic::apply(
        users,
        update_where(id, |user: &User| user.id, |user: &mut User| user.is_active = !user.is_active),
        client.set_user_status(ctx, id, !is_active),
    )
    .await
}

fn filter_users(users: Vec<User>, search: Option<&str>) -> Vec<User> {
    match search.map(str::trim).filter(|s| !s.is_empty()) {
        None => users,
        Some(search) => {
            let needle = search.to_lowercase();
            users
                .into_iter()
                .filter(|user| {
                    user.name.to_lowercase().contains(&needle) || user.username.to_lowercase().contains(&needle)
                })
                .collect()
        }
    }
}
