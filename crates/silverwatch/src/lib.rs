//! silverwatch - Client library for the Silver Watch monitoring backend
//!
//! This library provides a session-centric client for the Silver Watch
//! remote health monitoring API. All authenticated operations flow through
//! a [`Session`] object, which transparently refreshes the access token
//! (single-flight: concurrent 401s trigger exactly one refresh) and hands
//! out generic paginated [`ResourceClient`]s with shared, mutation-
//! invalidated read caching.
//!
//! # Example
//!
//! ```no_run
//! use silverwatch::{Credentials, ResourcePath, Session, ServerUrl, models::Device, paths};
//!
//! # async fn example() -> Result<(), silverwatch::Error> {
//! let server = ServerUrl::new("https://api.silverwatch.example")?;
//! let credentials = Credentials::new("alice@example.com", "app-password");
//! let session = Session::login(&server, credentials).await?;
//!
//! let devices = session.resource::<Device>(ResourcePath::new(paths::DEVICES)?);
//! let page = devices.page(1, &[("status", "Online")]).await?;
//!
//! for device in &page.results {
//!     println!("{}: {:?}", device.id, device.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod error;
mod http;
pub mod models;
pub mod paths;
pub mod resource;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{AccessToken, Credentials, RefreshToken, Registration, Session};
pub use error::Error;
pub use resource::{Page, ResourceClient};
pub use types::{ResourcePath, Role, ServerUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
