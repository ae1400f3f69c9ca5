//! Stored session handling.

pub mod storage;
