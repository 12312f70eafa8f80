//! Custom axum extractors.

pub mod body;
