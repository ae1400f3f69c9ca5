//! Validated value types used across the library.

mod resource_path;
mod role;
mod server_url;

pub use resource_path::ResourcePath;
pub use role::Role;
pub use server_url::ServerUrl;
