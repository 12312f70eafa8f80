//! HTTP request handlers for the REST API.

pub mod intent;
pub mod nbcl;
pub mod system;
pub mod verify;
