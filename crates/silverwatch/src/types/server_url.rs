//! Server base URL type.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL for a Silver Watch backend.
///
/// The URL must be absolute and use HTTPS; plain HTTP is accepted for
/// localhost only. Deployments that mount the API under a prefix are
/// supported: a non-root base path such as `https://host/api` is kept.
/// Query strings and fragments are rejected, since they would corrupt
/// every endpoint URL built from the base.
///
/// The stored form never ends with `/`. Collection and endpoint paths
/// always start with one, so [`endpoint`](Self::endpoint) is a plain
/// concatenation.
///
/// # Example
///
/// ```
/// use silverwatch::ServerUrl;
///
/// let server = ServerUrl::new("https://silverwatch.example/api/").unwrap();
/// assert_eq!(server.endpoint("/token/refresh/"),
///            "https://silverwatch.example/api/token/refresh/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServerUrl(String);

impl ServerUrl {
    /// Create a new server URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is relative, has no host, uses a
    /// disallowed scheme, or carries a query or fragment.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();

        let invalid = |reason: String| {
            Err(InvalidInputError::ServerUrl {
                value: s.to_string(),
                reason,
            }
            .into())
        };

        let url = match Url::parse(s) {
            Ok(url) => url,
            Err(e) => return invalid(e.to_string()),
        };

        if url.cannot_be_a_base() {
            return invalid("must be an absolute URL".to_string());
        }

        let Some(host) = url.host_str() else {
            return invalid("must have a host".to_string());
        };

        let is_localhost = matches!(host, "localhost" | "127.0.0.1" | "::1" | "[::1]");
        if url.scheme() != "https" && !(url.scheme() == "http" && is_localhost) {
            return invalid("must use HTTPS (HTTP allowed only for localhost)".to_string());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return invalid("must not carry a query or fragment".to_string());
        }

        let mut base = format!("{}://{}", url.scheme(), host);
        if let Some(port) = url.port() {
            base.push(':');
            base.push_str(&port.to_string());
        }
        // Keep a mounted prefix, drop any trailing slash.
        base.push_str(url.path().trim_end_matches('/'));

        Ok(Self(base))
    }

    /// Returns the full URL for an endpoint path (e.g. `/api/users/`).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ServerUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ServerUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_url_is_accepted_and_normalized() {
        let server = ServerUrl::new("https://api.silverwatch.example/").unwrap();
        assert_eq!(server.as_str(), "https://api.silverwatch.example");
    }

    #[test]
    fn localhost_http_is_accepted() {
        let server = ServerUrl::new("http://localhost:8000").unwrap();
        assert_eq!(server.endpoint("/login/"), "http://localhost:8000/login/");
    }

    #[test]
    fn mounted_prefix_is_kept() {
        let server = ServerUrl::new("https://silverwatch.example/api/").unwrap();
        assert_eq!(server.as_str(), "https://silverwatch.example/api");
        assert_eq!(
            server.endpoint("/devices/devices/"),
            "https://silverwatch.example/api/devices/devices/"
        );
    }

    #[test]
    fn port_is_preserved() {
        let server = ServerUrl::new("https://silverwatch.example:8443").unwrap();
        assert_eq!(
            server.endpoint("/login/"),
            "https://silverwatch.example:8443/login/"
        );
    }

    #[test]
    fn rejects_http_for_remote_hosts() {
        assert!(ServerUrl::new("http://api.silverwatch.example").is_err());
    }

    #[test]
    fn rejects_relative_url() {
        assert!(ServerUrl::new("/api/users/").is_err());
    }

    #[test]
    fn rejects_query_string() {
        assert!(ServerUrl::new("https://silverwatch.example?env=prod").is_err());
    }

    #[test]
    fn rejects_fragment() {
        assert!(ServerUrl::new("https://silverwatch.example/#dashboard").is_err());
    }
}
