use super::connect;
use crate::{libs::messages::Message, msg_success};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let conn = connect()?;
    conn.session.logout(&conn.client).await?;
    msg_success!(Message::LoggedOut);
    Ok(())
}
