//! Refresh command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::commands::{require_session, surface};
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct RefreshArgs {}

pub async fn run(_args: RefreshArgs) -> Result<()> {
    let session = require_session().await?;

    eprintln!("{}", "Refreshing session...".dimmed());

    if let Err(err) = session.refresh().await {
        return Err(surface(err).await);
    }

    // Save the updated session with the new token
    storage::save_session(&session)
        .await
        .context("Failed to save refreshed session")?;

    output::success("Session refreshed successfully");

    Ok(())
}
