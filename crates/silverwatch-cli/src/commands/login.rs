//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use silverwatch::{Credentials, ServerUrl, Session};

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Backend base URL
    #[arg(long)]
    pub server: String,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let server = ServerUrl::new(&args.server).context("Invalid server URL")?;
    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    let session = Session::login(&server, credentials)
        .await
        .context("Failed to login")?;

    // Save session
    storage::save_session(&session)
        .await
        .context("Failed to save session")?;

    // Print success
    output::success("Logged in successfully");
    println!();
    output::field("Server", session.server().as_str());
    if let Some(user) = session.user().await {
        output::field("Account", &user.display_name());
        if let Some(role) = user.role {
            output::field("Role", role.as_str());
        }
    }

    Ok(())
}
