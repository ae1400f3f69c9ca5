//! Session storage for persisting login state.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use silverwatch::{AccessToken, RefreshToken, ServerUrl, Session};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    server: String,
    access_token: String,
    access_expires_at: DateTime<Utc>,
    refresh_token: Option<String>,
}

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "silverwatch").context("Could not determine config directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Save a session to disk.
pub async fn save_session(session: &Session) -> Result<()> {
    let access = session
        .export_access_token()
        .await
        .context("Session holds no access token")?;

    let stored = StoredSession {
        server: session.server().as_str().to_string(),
        access_token: access.export(),
        access_expires_at: access.expires_at(),
        refresh_token: session.export_refresh_token().await.map(|t| t.export()),
    };

    let path = session_path()?;
    let json = serde_json::to_string_pretty(&stored)?;

    fs::write(&path, &json).context("Failed to write session file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

/// Load a session from disk.
pub async fn load_session() -> Result<Option<Session>> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read session file")?;
    let stored: StoredSession = serde_json::from_str(&json).context("Invalid session file")?;

    let server = ServerUrl::new(&stored.server).context("Invalid server URL in session")?;
    let access = AccessToken::with_expiry(stored.access_token, stored.access_expires_at);
    let refresh = stored.refresh_token.map(RefreshToken::new);

    if access.is_expired() {
        tracing::debug!("Stored access token is past its expiry; a refresh will be attempted on first use");
    }

    Ok(Some(Session::from_persisted(server, access, refresh)))
}

/// Clear the stored session.
pub async fn clear_session() -> Result<()> {
    let path = session_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove session file")?;
    }

    Ok(())
}
