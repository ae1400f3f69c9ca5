//! Subcommand implementations.

mod change_password;
mod create;
mod delete;
mod get;
mod list;
mod login;
mod logout;
mod refresh;
mod register;
mod reset_password;
mod update;
mod whoami;

use anyhow::{Context, Result, anyhow};
use clap::Subcommand;

use silverwatch::Session;
use silverwatch::error::AuthError;

use crate::output;
use crate::session::storage;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store a session
    Login(login::LoginArgs),

    /// Register a new account
    Register(register::RegisterArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Refresh the access token
    Refresh(refresh::RefreshArgs),

    /// Log out and discard the stored session
    Logout(logout::LogoutArgs),

    /// List items in a collection
    List(list::ListArgs),

    /// Fetch a single item by id
    Get(get::GetArgs),

    /// Create an item in a collection
    Create(create::CreateArgs),

    /// Update an item
    Update(update::UpdateArgs),

    /// Delete an item
    Delete(delete::DeleteArgs),

    /// Change the account password
    ChangePassword(change_password::ChangePasswordArgs),

    /// Request a password reset email
    ResetPassword(reset_password::ResetPasswordArgs),
}

pub async fn handle(command: Command) -> Result<()> {
    match command {
        Command::Login(args) => login::run(args).await,
        Command::Register(args) => register::run(args).await,
        Command::Whoami(args) => whoami::run(args).await,
        Command::Refresh(args) => refresh::run(args).await,
        Command::Logout(args) => logout::run(args).await,
        Command::List(args) => list::run(args).await,
        Command::Get(args) => get::run(args).await,
        Command::Create(args) => create::run(args).await,
        Command::Update(args) => update::run(args).await,
        Command::Delete(args) => delete::run(args).await,
        Command::ChangePassword(args) => change_password::run(args).await,
        Command::ResetPassword(args) => reset_password::run(args).await,
    }
}

/// Load the stored session or fail with a login hint.
pub(crate) async fn require_session() -> Result<Session> {
    storage::load_session()
        .await
        .context("Failed to load session")?
        .context("No active session. Run 'silverwatch login' first.")
}

/// Convert a library error for display, discarding the stored session when
/// the backend has rejected the refresh credential.
pub(crate) async fn surface(err: silverwatch::Error) -> anyhow::Error {
    if matches!(err, silverwatch::Error::Auth(AuthError::RefreshFailed)) {
        if let Err(clear_err) = storage::clear_session().await {
            tracing::warn!(error = %clear_err, "Failed to clear stored session");
        }
        return anyhow!("{err}. Run 'silverwatch login' again.");
    }

    if let silverwatch::Error::Api(api) = &err {
        if let Some(rendered) = output::field_errors(&api.body) {
            return anyhow!("HTTP {} rejected the request:\n{rendered}", api.status);
        }
    }

    err.into()
}

/// Parse repeatable `KEY=VALUE` filter arguments.
pub(crate) fn parse_filters(raw: &[String]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .with_context(|| format!("Invalid filter '{pair}', expected KEY=VALUE"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_filters;

    #[test]
    fn parses_key_value_pairs() {
        let filters = parse_filters(&["status=Online".to_string(), "type=Wearable".to_string()])
            .unwrap();
        assert_eq!(filters[0], ("status".to_string(), "Online".to_string()));
        assert_eq!(filters[1], ("type".to_string(), "Wearable".to_string()));
    }

    #[test]
    fn rejects_missing_equals() {
        assert!(parse_filters(&["statusOnline".to_string()]).is_err());
    }
}
