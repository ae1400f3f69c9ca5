//! Generic resource operations and types.
//!
//! This module provides the paginated CRUD client returned by
//! [`Session::resource`](crate::Session::resource) and the supporting page
//! envelope and cache types.

mod cache;
mod client;
mod page;

pub(crate) use cache::PageCache;
pub use client::ResourceClient;
pub use page::Page;
