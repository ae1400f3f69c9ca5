//! HTTP client implementation.
//!
//! This module provides the HTTP plumbing shared by the session and the
//! resource clients: one reqwest client, a re-sendable request descriptor,
//! and the auth endpoint wire types.

mod client;
mod endpoints;

pub(crate) use client::{HttpClient, Request};
pub(crate) use endpoints::*;
