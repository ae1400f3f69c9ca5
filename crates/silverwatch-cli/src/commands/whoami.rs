//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use crate::commands::require_session;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let session = require_session().await?;

    output::field("Server", session.server().as_str());

    if let Some(token) = session.export_access_token().await {
        let status = if token.is_expired() { "expired" } else { "valid" };
        output::field(
            "Access token",
            &format!("{status} (expires {})", token.expires_at().format("%Y-%m-%d %H:%M UTC")),
        );
    }

    let refresh = if session.export_refresh_token().await.is_some() {
        "present"
    } else {
        "absent"
    };
    output::field("Refresh token", refresh);

    Ok(())
}
