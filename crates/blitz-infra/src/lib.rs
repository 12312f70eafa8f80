//! Infrastructure layer for Blitz.
//!
//! Reads `blitz.toml` from disk and layers environment overrides on top.

pub mod config;
