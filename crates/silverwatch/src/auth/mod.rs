//! Authentication types and session management.
//!
//! This module provides the credential primitives and the [`Session`]
//! object every authenticated operation flows through.

mod credentials;
mod session;
mod tokens;

pub use credentials::{Credentials, Registration};
pub use session::Session;
pub use tokens::{AccessToken, RefreshToken};
