//! Request guards.
//!
//! Precondition checks run before any payload is built. They return a typed
//! [`RequestError`] that the HTTP layer maps to a 400 response.

use blitz_types::error::RequestError;
use blitz_types::intent::{DEFAULT_COEFFICIENT, IntentRequest, IntentVector};

/// Require a non-empty string field.
pub fn require_field(name: &'static str, value: Option<String>) -> Result<String, RequestError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => {
            tracing::debug!(field = name, "request rejected: missing field");
            Err(RequestError::MissingField(name))
        }
    }
}

fn coefficient(field: &'static str, value: Option<f64>) -> Result<f64, RequestError> {
    let value = value.unwrap_or(DEFAULT_COEFFICIENT);
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(RequestError::OutOfRange { field, value })
    }
}

/// Validate an intent request and fill in defaults.
pub fn intent_vector(req: IntentRequest) -> Result<IntentVector, RequestError> {
    Ok(IntentVector {
        phi_1: coefficient("phi_1", req.phi_1)?,
        phi_22: coefficient("phi_22", req.phi_22)?,
        phi_omega: coefficient("phi_omega", req.phi_omega)?,
        metadata: req.metadata.unwrap_or_default(),
    })
}
