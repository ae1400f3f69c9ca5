//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    let session = match storage::load_session().await.context("Failed to load session")? {
        Some(session) => session,
        None => {
            output::error("No active session.");
            return Ok(());
        }
    };

    // The stored file is discarded even if the backend call fails; the
    // library clears its local state the same way.
    let result = session.logout().await;

    storage::clear_session()
        .await
        .context("Failed to clear stored session")?;

    if let Err(err) = result {
        tracing::warn!(error = %err, "Logout request failed; local session discarded");
    }

    output::success("Logged out");

    Ok(())
}
