//! User account record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Whether an account is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

/// A user account.
///
/// Login responses carry a partial user, so everything beyond the identity
/// fields is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl User {
    /// The user's display name, falling back to the email address.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_partial_user() {
        let user: User =
            serde_json::from_str(r#"{"id": "u1", "email": "a@b.com"}"#).unwrap();
        assert_eq!(user.display_name(), "a@b.com");
        assert!(user.role.is_none());
    }

    #[test]
    fn deserializes_full_user() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u1",
                "email": "alice@example.com",
                "firstName": "Alice",
                "lastName": "Mwangi",
                "role": "caregiver",
                "status": "Active",
                "lastActive": "2024-03-01T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "Alice Mwangi");
        assert_eq!(user.role, Some(Role::Caregiver));
        assert_eq!(user.status, Some(UserStatus::Active));
    }
}
