//! Application state shared by the HTTP handlers.

use std::time::Instant;

/// Shared application state.
///
/// Cheap to clone: it only records when the server started.
#[derive(Clone)]
pub struct AppState {
    pub started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Seconds elapsed since the state was created.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
