//! Auth endpoint definitions and request/response types.

use serde::{Deserialize, Serialize};

use crate::models::User;
use crate::types::Role;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST {email, password}
pub const LOGIN: &str = "/login/";

/// POST {refresh}
pub const LOGOUT: &str = "/logout/";

/// POST {email, password1, password2, role}
pub const REGISTER: &str = "/register/";

/// POST, no body; the server-side refresh cookie rides along
pub const TOKEN_REFRESH: &str = "/token/refresh/";

/// POST {token}
pub const TOKEN_VERIFY: &str = "/token/verify/";

/// POST {new_password1, new_password2}
pub const PASSWORD_CHANGE: &str = "/password/change/";

/// POST {email}
pub const PASSWORD_RESET: &str = "/password/reset/";

/// POST {email}
pub const RESEND_EMAIL: &str = "/resend-email/";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for registration.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password1: &'a str,
    pub password2: &'a str,
    pub role: Role,
}

/// Response from login and registration.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    pub user: User,
}

/// Response from the token refresh endpoint.
///
/// The backend names the field `access`; one deployment emits
/// `access_token`, so both spellings are accepted.
#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    #[serde(alias = "access_token")]
    pub access: String,
}

/// Request body for logout.
#[derive(Debug, Serialize)]
pub struct LogoutRequest<'a> {
    pub refresh: &'a str,
}

/// Request body for changing the account password.
#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest<'a> {
    pub new_password1: &'a str,
    pub new_password2: &'a str,
}

/// Request body for requesting a password reset email.
#[derive(Debug, Serialize)]
pub struct ResetPasswordRequest<'a> {
    pub email: &'a str,
}

/// Request body for resending the account confirmation email.
#[derive(Debug, Serialize)]
pub struct ResendEmailRequest<'a> {
    pub email: &'a str,
}

/// Request body for verifying a token.
#[derive(Debug, Serialize)]
pub struct VerifyTokenRequest<'a> {
    pub token: &'a str,
}
