//! HTTP/REST API layer for Blitz.
//!
//! Axum-based JSON API with permissive CORS, security headers, request ids
//! and a uniform error body.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod request_id;
pub mod router;
