use super::connect;
use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username; prompted for when omitted
    username: Option<String>,
}

pub async fn cmd(login_args: LoginArgs) -> Result<()> {
    let conn = connect()?;

    let username = match login_args.username {
        Some(username) => username,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUsername.to_string())
            .interact_text()?,
    };

    let session = conn
        .session
        .login(&conn.client, &username, |_| {
            Ok(Password::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPassword.to_string())
                .interact()?)
        })
        .await?;

    msg_success!(Message::LoginSuccess(format!("{} ({})", session.name, session.user_role)));
    Ok(())
}
