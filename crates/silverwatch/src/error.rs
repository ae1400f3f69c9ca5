//! Error types for the silverwatch library.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, backend API, and input validation errors.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// The unified error type for silverwatch operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (invalid credentials, failed refresh).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// API errors (non-2xx responses with a structured body).
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (invalid server URL, resource path).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No live session; the caller must log in first.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Login was rejected by the backend.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The token refresh cycle failed; the session has been cleared and
    /// the caller must re-authenticate.
    #[error("token refresh failed")]
    RefreshFailed,
}

/// An error response from the backend API.
///
/// Carries the HTTP status and the parsed Django-REST error body so callers
/// can surface field-level or general messages.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Parsed error payload.
    pub body: ErrorBody,
}

/// The shapes a backend error body can take.
///
/// Django REST Framework responds either with `{"detail": "..."}` or with a
/// map of field names to lists of messages (including `non_field_errors`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// A single general message (`detail`).
    Detail { message: String },
    /// Field-keyed validation messages.
    Fields { fields: BTreeMap<String, Vec<String>> },
    /// Empty or unparseable body.
    Empty,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, body: ErrorBody) -> Self {
        Self { status, body }
    }

    /// Check if this is an authentication-rejected response.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
    }

    /// Parse a JSON error body into its tagged shape.
    ///
    /// Strings and string arrays under field keys are both accepted; any
    /// other shape falls back to [`ErrorBody::Empty`].
    pub fn parse_body(status: u16, body: &[u8]) -> Self {
        let value: serde_json::Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(_) => return Self::new(status, ErrorBody::Empty),
        };

        let Some(object) = value.as_object() else {
            return Self::new(status, ErrorBody::Empty);
        };

        if let Some(detail) = object.get("detail").and_then(|d| d.as_str()) {
            return Self::new(
                status,
                ErrorBody::Detail {
                    message: detail.to_string(),
                },
            );
        }

        let mut fields = BTreeMap::new();
        for (key, messages) in object {
            match messages {
                serde_json::Value::String(s) => {
                    fields.insert(key.clone(), vec![s.clone()]);
                }
                serde_json::Value::Array(items) => {
                    let strings: Vec<String> = items
                        .iter()
                        .filter_map(|i| i.as_str().map(str::to_string))
                        .collect();
                    if !strings.is_empty() {
                        fields.insert(key.clone(), strings);
                    }
                }
                _ => {}
            }
        }

        if fields.is_empty() {
            Self::new(status, ErrorBody::Empty)
        } else {
            Self::new(status, ErrorBody::Fields { fields })
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        match &self.body {
            ErrorBody::Detail { message } => write!(f, ": {}", message),
            ErrorBody::Fields { fields } => {
                for (field, messages) in fields {
                    write!(f, "; {}: {}", field, messages.join(", "))?;
                }
                Ok(())
            }
            ErrorBody::Empty => Ok(()),
        }
    }
}

impl std::error::Error for ApiError {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid server base URL.
    #[error("invalid server URL '{value}': {reason}")]
    ServerUrl { value: String, reason: String },

    /// Invalid resource collection path.
    #[error("invalid resource path '{value}': {reason}")]
    ResourcePath { value: String, reason: String },

    /// Invalid portal role.
    #[error("invalid role '{value}'")]
    Role { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_detail_body() {
        let err = ApiError::parse_body(403, br#"{"detail": "Forbidden"}"#);
        assert_eq!(
            err.body,
            ErrorBody::Detail {
                message: "Forbidden".to_string()
            }
        );
        assert!(!err.is_auth_error());
    }

    #[test]
    fn parses_field_errors() {
        let err = ApiError::parse_body(
            400,
            br#"{"email": ["Enter a valid email address."], "non_field_errors": ["Unable to log in."]}"#,
        );
        let ErrorBody::Fields { fields } = &err.body else {
            panic!("expected field errors");
        };
        assert_eq!(fields["email"], vec!["Enter a valid email address."]);
        assert_eq!(fields["non_field_errors"], vec!["Unable to log in."]);
    }

    #[test]
    fn accepts_bare_string_field_messages() {
        let err = ApiError::parse_body(400, br#"{"password": "too short"}"#);
        let ErrorBody::Fields { fields } = &err.body else {
            panic!("expected field errors");
        };
        assert_eq!(fields["password"], vec!["too short"]);
    }

    #[test]
    fn non_json_body_is_empty() {
        let err = ApiError::parse_body(500, b"Internal Server Error");
        assert_eq!(err.body, ErrorBody::Empty);
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn unauthorized_is_auth_error() {
        let err = ApiError::parse_body(401, br#"{"detail": "Token expired"}"#);
        assert!(err.is_auth_error());
    }
}
