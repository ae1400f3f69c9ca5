//! Reset password command implementation.

use anyhow::Result;
use clap::Args;

use crate::commands::{require_session, surface};
use crate::output;

#[derive(Args, Debug)]
pub struct ResetPasswordArgs {
    /// Email of the account to reset
    #[arg(long)]
    pub email: String,
}

pub async fn run(args: ResetPasswordArgs) -> Result<()> {
    let session = require_session().await?;

    if let Err(err) = session.reset_password(&args.email).await {
        return Err(surface(err).await);
    }

    output::success("Password reset email requested");

    Ok(())
}
