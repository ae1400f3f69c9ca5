//! Session management for authenticated backend operations.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument, warn};

use crate::error::{AuthError, Error};
use crate::http::{
    self, AuthResponse, ChangePasswordRequest, HttpClient, LoginRequest, LogoutRequest,
    RefreshResponse, RegisterRequest, Request, ResendEmailRequest, ResetPasswordRequest,
    VerifyTokenRequest,
};
use crate::models::User;
use crate::resource::{PageCache, ResourceClient};
use crate::types::{ResourcePath, ServerUrl};

use super::credentials::{Credentials, Registration};
use super::tokens::{AccessToken, RefreshToken};

/// A session representing an authenticated connection to a Silver Watch
/// backend.
///
/// All authenticated operations require a `Session`. Sessions are obtained
/// via [`Session::login()`] or [`Session::register()`] and hand out typed
/// collection clients via [`Session::resource()`].
///
/// # Thread Safety
///
/// Sessions are cheap to clone (they use internal `Arc`) and are safe to
/// share across tasks. Token refresh is single-flight: however many
/// concurrent requests hit a 401, one refresh call is issued and every
/// waiter retries with the token it produced.
///
/// # Example
///
/// ```no_run
/// use silverwatch::{Credentials, ResourcePath, Session, ServerUrl};
///
/// # async fn example() -> Result<(), silverwatch::Error> {
/// let server = ServerUrl::new("https://api.silverwatch.example")?;
/// let session = Session::login(&server, Credentials::new("a@b.com", "secret1")).await?;
///
/// let devices = session.resource::<serde_json::Value>(ResourcePath::new("/devices/devices/")?);
/// let page = devices.page(1, &[]).await?;
/// println!("{} devices", page.count);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    http: HttpClient,
    /// `None` means logged out; every authenticated call fails fast then.
    state: RwLock<Option<TokenState>>,
    /// Serializes refresh cycles. Held only for the duration of one
    /// refresh network call; waiters queue here instead of re-triggering.
    refresh_gate: Mutex<()>,
    cache: PageCache,
    user: RwLock<Option<User>>,
}

struct TokenState {
    access: AccessToken,
    refresh: Option<RefreshToken>,
    /// Bumped on every successful refresh. A request that observed
    /// generation N only performs a refresh if the generation is still N
    /// once it holds the gate; otherwise another task already refreshed.
    generation: u64,
}

impl Session {
    /// Authenticate with a backend and create a new session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if the backend rejects the
    /// login; validation errors and transport failures propagate unchanged.
    #[instrument(skip(credentials), fields(server = %server, email = %credentials.email()))]
    pub async fn login(server: &ServerUrl, credentials: Credentials) -> Result<Self, Error> {
        info!("Creating new session");

        let http = HttpClient::new(server.clone());
        let request = Request::post(http::LOGIN).with_json(&LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        })?;

        let response: AuthResponse = match http.send(&request, None).await {
            Ok(response) => response,
            Err(Error::Api(err)) if err.is_auth_error() => {
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(err) => return Err(err),
        };

        debug!("Session created successfully");
        Ok(Self::from_auth_response(http, response))
    }

    /// Register a new account and create a session for it.
    #[instrument(skip(registration), fields(server = %server, email = %registration.email()))]
    pub async fn register(server: &ServerUrl, registration: Registration) -> Result<Self, Error> {
        info!("Registering new account");

        let http = HttpClient::new(server.clone());
        let request = Request::post(http::REGISTER).with_json(&RegisterRequest {
            email: registration.email(),
            password1: registration.password1(),
            password2: registration.password2(),
            role: registration.role(),
        })?;

        let response: AuthResponse = http.send(&request, None).await?;

        debug!("Account registered successfully");
        Ok(Self::from_auth_response(http, response))
    }

    /// Create a session from persisted tokens.
    ///
    /// This allows restoring a session without re-authenticating. The
    /// caller is responsible for ensuring the tokens are valid; an expired
    /// access token is recovered through the normal 401-refresh path.
    pub fn from_persisted(
        server: ServerUrl,
        access: AccessToken,
        refresh: Option<RefreshToken>,
    ) -> Self {
        let http = HttpClient::new(server);

        Self {
            inner: Arc::new(SessionInner {
                http,
                state: RwLock::new(Some(TokenState {
                    access,
                    refresh,
                    generation: 0,
                })),
                refresh_gate: Mutex::new(()),
                cache: PageCache::new(),
                user: RwLock::new(None),
            }),
        }
    }

    fn from_auth_response(http: HttpClient, response: AuthResponse) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                http,
                state: RwLock::new(Some(TokenState {
                    access: AccessToken::new(response.access),
                    refresh: response.refresh.map(RefreshToken::new),
                    generation: 0,
                })),
                refresh_gate: Mutex::new(()),
                cache: PageCache::new(),
                user: RwLock::new(Some(response.user)),
            }),
        }
    }

    /// Returns the server URL for this session.
    pub fn server(&self) -> &ServerUrl {
        self.inner.http.server()
    }

    /// Returns the user summary captured at login or registration, if any.
    pub async fn user(&self) -> Option<User> {
        self.inner.user.read().await.clone()
    }

    /// Whether the session currently holds a credential.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.state.read().await.is_some()
    }

    /// Obtain a typed CRUD client for a collection path.
    ///
    /// All clients created from one session share a page cache, so a
    /// mutation through any client invalidates cached reads for its path.
    pub fn resource<T: DeserializeOwned>(&self, path: ResourcePath) -> ResourceClient<T> {
        ResourceClient::new(self.clone(), path)
    }

    /// Force one refresh cycle now.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RefreshFailed`] if the backend rejects the
    /// refresh; the session is cleared in that case.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<(), Error> {
        let (_, generation) = self.current_token().await?;
        self.refresh_from(generation).await?;
        Ok(())
    }

    /// Log out and discard the credential.
    ///
    /// The logout request is best-effort: tokens and cached pages are
    /// cleared even if the backend call fails.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), Error> {
        info!("Logging out");

        let (access, refresh) = {
            let state = self.inner.state.read().await;
            match state.as_ref() {
                Some(t) => (Some(t.access.clone()), t.refresh.clone()),
                None => (None, None),
            }
        };

        let result = match &refresh {
            Some(token) => {
                let request = Request::post(http::LOGOUT)
                    .with_json(&LogoutRequest {
                        refresh: token.as_str(),
                    });
                match request {
                    Ok(request) => {
                        self.inner
                            .http
                            .send_no_content(&request, access.as_ref())
                            .await
                    }
                    Err(err) => Err(err),
                }
            }
            None => Ok(()),
        };

        *self.inner.state.write().await = None;
        *self.inner.user.write().await = None;
        self.inner.cache.clear().await;

        result
    }

    /// Change the account password.
    #[instrument(skip(self, new_password1, new_password2))]
    pub async fn change_password(
        &self,
        new_password1: &str,
        new_password2: &str,
    ) -> Result<(), Error> {
        let request = Request::post(http::PASSWORD_CHANGE).with_json(&ChangePasswordRequest {
            new_password1,
            new_password2,
        })?;
        self.send_no_content(&request).await
    }

    /// Request a password reset email for an account.
    #[instrument(skip(self))]
    pub async fn reset_password(&self, email: &str) -> Result<(), Error> {
        let request =
            Request::post(http::PASSWORD_RESET).with_json(&ResetPasswordRequest { email })?;
        self.send_no_content(&request).await
    }

    /// Ask the backend to resend the account confirmation email.
    #[instrument(skip(self))]
    pub async fn resend_email(&self, email: &str) -> Result<(), Error> {
        let request =
            Request::post(http::RESEND_EMAIL).with_json(&ResendEmailRequest { email })?;
        self.send_no_content(&request).await
    }

    /// Ask the backend whether a token is still accepted.
    ///
    /// Returns `Ok(false)` when the backend rejects the token; other
    /// failures propagate.
    #[instrument(skip(self, token))]
    pub async fn verify_token(&self, token: &str) -> Result<bool, Error> {
        let request = Request::post(http::TOKEN_VERIFY).with_json(&VerifyTokenRequest { token })?;
        match self.inner.http.send_no_content(&request, None).await {
            Ok(()) => Ok(true),
            Err(Error::Api(err)) if err.is_auth_error() || err.status == 400 => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Export the current access token for persistence.
    ///
    /// # Security
    ///
    /// Handle the returned token securely. It grants access to the account.
    pub async fn export_access_token(&self) -> Option<AccessToken> {
        let state = self.inner.state.read().await;
        state.as_ref().map(|t| t.access.clone())
    }

    /// Export the current refresh token for persistence.
    ///
    /// # Security
    ///
    /// Handle the returned token securely. It can mint new access tokens.
    pub async fn export_refresh_token(&self) -> Option<RefreshToken> {
        let state = self.inner.state.read().await;
        state.as_ref().and_then(|t| t.refresh.clone())
    }

    pub(crate) fn cache(&self) -> &PageCache {
        &self.inner.cache
    }

    // ========================================================================
    // Authenticated send with single 401-refresh-retry
    // ========================================================================

    /// Send an authenticated request, refreshing and retrying once on 401.
    ///
    /// The retry is structural: a second 401 propagates as a terminal API
    /// error rather than triggering another refresh.
    pub(crate) async fn send<R: DeserializeOwned>(&self, request: &Request) -> Result<R, Error> {
        let (token, generation) = self.current_token().await?;

        match self.inner.http.send(request, Some(&token)).await {
            Err(Error::Api(err)) if err.is_auth_error() => {
                debug!(path = %request.path, "request unauthorized, refreshing token");
                let token = self.refresh_from(generation).await?;
                self.inner.http.send(request, Some(&token)).await
            }
            other => other,
        }
    }

    /// [`send`](Self::send) for endpoints whose success response has no body.
    pub(crate) async fn send_no_content(&self, request: &Request) -> Result<(), Error> {
        let (token, generation) = self.current_token().await?;

        match self.inner.http.send_no_content(request, Some(&token)).await {
            Err(Error::Api(err)) if err.is_auth_error() => {
                debug!(path = %request.path, "request unauthorized, refreshing token");
                let token = self.refresh_from(generation).await?;
                self.inner.http.send_no_content(request, Some(&token)).await
            }
            other => other,
        }
    }

    async fn current_token(&self) -> Result<(AccessToken, u64), Error> {
        let state = self.inner.state.read().await;
        match state.as_ref() {
            Some(t) => Ok((t.access.clone(), t.generation)),
            None => Err(AuthError::NotAuthenticated.into()),
        }
    }

    /// The refresh coordinator.
    ///
    /// `seen_generation` is the token generation the caller's failed
    /// request used. The gate serializes refresh cycles: the first task
    /// through performs the one network call; tasks queued behind it
    /// observe the bumped generation and reuse the new token, so N
    /// concurrent 401s produce exactly one refresh request. If the cycle
    /// fails, the session is cleared and every queued waiter gets
    /// [`AuthError::RefreshFailed`].
    async fn refresh_from(&self, seen_generation: u64) -> Result<AccessToken, Error> {
        let _gate = self.inner.refresh_gate.lock().await;

        {
            let state = self.inner.state.read().await;
            match state.as_ref() {
                // A concurrent refresh already failed and logged us out.
                None => return Err(AuthError::RefreshFailed.into()),
                Some(t) if t.generation > seen_generation => return Ok(t.access.clone()),
                Some(_) => {}
            }
        }

        info!("Refreshing access token");

        // No body and no bearer header: the server-side refresh cookie
        // accompanies the request.
        let request = Request::post(http::TOKEN_REFRESH);
        match self.inner.http.send::<RefreshResponse>(&request, None).await {
            Ok(response) => {
                let access = AccessToken::new(response.access);
                let mut state = self.inner.state.write().await;
                match state.as_mut() {
                    Some(t) => {
                        t.access = access.clone();
                        t.generation += 1;
                        debug!("Access token refreshed");
                        Ok(access)
                    }
                    // Logged out while the refresh was in flight; do not
                    // resurrect the session.
                    None => Err(AuthError::NotAuthenticated.into()),
                }
            }
            Err(err) => {
                warn!(error = %err, "Token refresh failed, clearing session");
                *self.inner.state.write().await = None;
                *self.inner.user.write().await = None;
                self.inner.cache.clear().await;
                Err(AuthError::RefreshFailed.into())
            }
        }
    }
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("server", &self.inner.http.server())
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> Session {
        let server = ServerUrl::new("https://api.silverwatch.example").unwrap();
        Session::from_persisted(server, AccessToken::new("tok1"), None)
    }

    #[tokio::test]
    async fn persisted_session_is_authenticated() {
        let session = test_session();
        assert!(session.is_authenticated().await);
        assert!(session.export_access_token().await.is_some());
        assert!(session.export_refresh_token().await.is_none());
    }

    #[tokio::test]
    async fn logout_without_refresh_token_clears_state_offline() {
        // No refresh token, so no network call is attempted.
        let session = test_session();
        session.logout().await.unwrap();

        assert!(!session.is_authenticated().await);
        assert!(session.export_access_token().await.is_none());
    }

    #[tokio::test]
    async fn requests_fail_fast_when_logged_out() {
        let session = test_session();
        session.logout().await.unwrap();

        let request = Request::get("/api/users/");
        let err = session.send::<serde_json::Value>(&request).await.unwrap_err();
        assert!(matches!(err, Error::Auth(AuthError::NotAuthenticated)));
    }

    #[test]
    fn debug_hides_tokens() {
        let session = test_session();
        let debug = format!("{:?}", session);
        assert!(!debug.contains("tok1"));
        assert!(debug.contains("[REDACTED]"));
    }
}
