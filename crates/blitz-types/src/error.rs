use thiserror::Error;

/// Errors raised while validating an incoming request body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// A required field was absent or empty.
    #[error("{} required", capitalize(.0))]
    MissingField(&'static str),

    #[error("{field} must be within [0.0, 1.0], got {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("invalid request body: {0}")]
    Malformed(String),
}

impl RequestError {
    /// Machine-readable code used in error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            RequestError::MissingField(_) => "MISSING_FIELD",
            RequestError::OutOfRange { .. } | RequestError::Malformed(_) => "VALIDATION_ERROR",
        }
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
