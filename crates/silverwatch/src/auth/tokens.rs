//! Token types for backend authentication.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// How long an access token is assumed to live when the backend does not
/// say. Matches the one-day expiry the backend applies to its auth cookies.
const ACCESS_TOKEN_TTL_HOURS: i64 = 24;

/// An access token for authenticated API requests.
///
/// Access tokens are short-lived JWTs attached as a bearer header. The
/// backend does not report an expiry, so the client stamps each token with
/// a one-day lifetime. Expiry is advisory only; a 401 response remains the
/// authoritative signal that a refresh is needed.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Create a new access token stamped with the default lifetime.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            value: token.into(),
            expires_at: Utc::now() + Duration::hours(ACCESS_TOKEN_TTL_HOURS),
        }
    }

    /// Create a token with an explicit expiry, e.g. restored from disk.
    pub fn with_expiry(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: token.into(),
            expires_at,
        }
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers.
    pub(crate) fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the expiry timestamp.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Check whether the token's advisory lifetime has elapsed.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Export the raw token value for persistence.
    ///
    /// # Security
    ///
    /// Handle the returned value securely. It grants access to the account.
    pub fn export(&self) -> String {
        self.value.clone()
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// A refresh token for obtaining new access tokens.
///
/// Refresh tokens are longer-lived and used to obtain new access tokens
/// without requiring re-authentication.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct RefreshToken(String);

impl RefreshToken {
    /// Create a new refresh token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in refresh and logout requests.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Export the raw token value for persistence.
    ///
    /// # Security
    ///
    /// Handle the returned value securely. It can mint new access tokens.
    pub fn export(&self) -> String {
        self.0.clone()
    }
}

// Hide token value in Debug output
impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_hides_value_in_debug() {
        let token = AccessToken::new("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("eyJ"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn refresh_token_hides_value_in_debug() {
        let token = RefreshToken::new("refresh_token_value_here");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("refresh_token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn fresh_token_is_not_expired() {
        let token = AccessToken::new("tok");
        assert!(!token.is_expired());
    }

    #[test]
    fn explicit_past_expiry_is_expired() {
        let token = AccessToken::with_expiry("tok", Utc::now() - Duration::minutes(1));
        assert!(token.is_expired());
    }
}
