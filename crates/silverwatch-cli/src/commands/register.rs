//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use silverwatch::{Registration, Role, ServerUrl, Session};

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Portal role (admin, caregiver, technician, patient)
    #[arg(long)]
    pub role: Role,

    /// Backend base URL
    #[arg(long)]
    pub server: String,
}

pub async fn run(args: RegisterArgs) -> Result<()> {
    let server = ServerUrl::new(&args.server).context("Invalid server URL")?;
    let registration = Registration::new(&args.email, &args.password, &args.password, args.role);

    eprintln!("{}", "Registering account...".dimmed());

    let session = Session::register(&server, registration)
        .await
        .context("Failed to register")?;

    storage::save_session(&session)
        .await
        .context("Failed to save session")?;

    output::success("Account registered");
    println!();
    output::field("Server", session.server().as_str());
    output::field("Account", &args.email);
    output::field("Role", args.role.as_str());

    Ok(())
}
