//! Resource collection path type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated backend collection path, e.g. `/api/users/`.
///
/// Collection paths follow the Django REST ViewSet convention: the list
/// endpoint lives at the path itself and item endpoints at `{path}{id}/`.
///
/// # Example
///
/// ```
/// use silverwatch::ResourcePath;
///
/// let users = ResourcePath::new("/api/users/").unwrap();
/// assert_eq!(users.item_path("42"), "/api/users/42/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourcePath(String);

impl ResourcePath {
    /// Create a new resource path, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error unless the path starts and ends with `/` and
    /// contains no whitespace or query component.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();

        let invalid = |reason: &str| {
            Err(InvalidInputError::ResourcePath {
                value: s.clone(),
                reason: reason.to_string(),
            }
            .into())
        };

        if s.len() < 2 {
            return invalid("must name a collection");
        }
        if !s.starts_with('/') {
            return invalid("must start with '/'");
        }
        if !s.ends_with('/') {
            return invalid("must end with '/'");
        }
        if s.chars().any(char::is_whitespace) {
            return invalid("must not contain whitespace");
        }
        if s.contains('?') || s.contains('#') {
            return invalid("must not contain a query or fragment");
        }

        Ok(Self(s))
    }

    /// Returns the path for a single item in this collection.
    pub fn item_path(&self, id: &str) -> String {
        format!("{}{}/", self.0, id)
    }

    /// Returns the path as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResourcePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ResourcePath {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ResourcePath> for String {
    fn from(path: ResourcePath) -> Self {
        path.0
    }
}

impl AsRef<str> for ResourcePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_collection_path() {
        let path = ResourcePath::new("/devices/devices/").unwrap();
        assert_eq!(path.as_str(), "/devices/devices/");
    }

    #[test]
    fn item_path_appends_id_and_slash() {
        let path = ResourcePath::new("/api/users/").unwrap();
        assert_eq!(path.item_path("abc-123"), "/api/users/abc-123/");
    }

    #[test]
    fn rejects_missing_leading_slash() {
        assert!(ResourcePath::new("api/users/").is_err());
    }

    #[test]
    fn rejects_missing_trailing_slash() {
        assert!(ResourcePath::new("/api/users").is_err());
    }

    #[test]
    fn rejects_query_component() {
        assert!(ResourcePath::new("/api/users/?page=1/").is_err());
    }

    #[test]
    fn rejects_whitespace() {
        assert!(ResourcePath::new("/api/some users/").is_err());
    }
}
