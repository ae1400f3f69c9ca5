//! Change password command implementation.

use anyhow::Result;
use clap::Args;

use crate::commands::{require_session, surface};
use crate::output;

#[derive(Args, Debug)]
pub struct ChangePasswordArgs {
    /// New account password
    #[arg(long)]
    pub new_password: String,
}

pub async fn run(args: ChangePasswordArgs) -> Result<()> {
    let session = require_session().await?;

    if let Err(err) = session
        .change_password(&args.new_password, &args.new_password)
        .await
    {
        return Err(surface(err).await);
    }

    output::success("Password changed");

    Ok(())
}
