//! Login and registration credential types.

use std::fmt;

use crate::types::Role;

/// Login credentials for backend authentication.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental
/// logging.
///
/// # Example
///
/// ```
/// use silverwatch::Credentials;
///
/// let creds = Credentials::new("alice@example.com", "app-password-here");
/// assert_eq!(creds.email(), "alice@example.com");
/// ```
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the account email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    /// Never log or display this value.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Details for registering a new account.
///
/// The backend expects the password twice plus the portal role the account
/// should be created with.
pub struct Registration {
    email: String,
    password1: String,
    password2: String,
    role: Role,
}

impl Registration {
    /// Create a new registration request.
    pub fn new(
        email: impl Into<String>,
        password1: impl Into<String>,
        password2: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            email: email.into(),
            password1: password1.into(),
            password2: password2.into(),
            role,
        }
    }

    /// Returns the account email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the requested portal role.
    pub fn role(&self) -> Role {
        self.role
    }

    pub(crate) fn password1(&self) -> &str {
        &self.password1
    }

    pub(crate) fn password2(&self) -> &str {
        &self.password2
    }
}

// Intentionally hide passwords in Debug output
impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("password1", &"[REDACTED]")
            .field("password2", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("alice@example.com", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice@example.com"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn registration_hides_passwords_in_debug() {
        let reg = Registration::new("bob@example.com", "hunter2", "hunter2", Role::Patient);
        let debug = format!("{:?}", reg);
        assert!(debug.contains("bob@example.com"));
        assert!(!debug.contains("hunter2"));
    }
}
