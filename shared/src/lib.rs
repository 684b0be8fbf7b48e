//! # BloomAccess Shared
//!
//! Cross-cutting types shared by every layer of the BloomAccess backend:
//! configuration, the API response envelope, and input validation helpers.

pub mod config;
pub mod types;
pub mod utils;
