use super::connect;
use crate::{
    api::auth::ChangePasswordRequest,
    libs::messages::Message,
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Password};

pub async fn cmd() -> Result<()> {
    let conn = connect()?;
    let ctx = conn.session.context()?;

    let prompt = |message: Message| {
        Password::with_theme(&ColorfulTheme::default())
            .with_prompt(message.to_string())
            .interact()
    };
    let current_password = prompt(Message::PromptCurrentPassword)?;
    let new_password = prompt(Message::PromptNewPassword)?;
    let password_confirmation = prompt(Message::PromptConfirmPassword)?;
    if new_password != password_confirmation {
        msg_bail_anyhow!(Message::PasswordMismatch);
    }

    let request = ChangePasswordRequest {
        current_password: &current_password,
        new_password: &new_password,
        password_confirmation: &password_confirmation,
    };
    conn.session.guard(conn.client.change_password(&ctx, &request).await)?;

    msg_success!(Message::PasswordChanged);
    Ok(())
}
