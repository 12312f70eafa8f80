//! Shared types for Blitz.
//!
//! Wire payloads returned by the HTTP surface, request bodies accepted by it,
//! the request-level error enum and the server configuration.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod error;
pub mod intent;
pub mod payload;
pub mod request;
