//! Application error type mapping to HTTP status codes and the error body.

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use blitz_core::payload::COHERENCE;
use blitz_types::error::RequestError;
use blitz_types::payload::ErrorPayload;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Request body failed validation.
    Request(RequestError),
    /// No route matched.
    NotFound(String),
    /// Unexpected failure (including caught panics).
    Internal(String),
}

impl From<RequestError> for AppError {
    fn from(e: RequestError) -> Self {
        AppError::Request(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Request(e) => (StatusCode::BAD_REQUEST, e.code(), e.to_string()),
            AppError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("No route for {path}"),
            ),
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ErrorPayload {
            error: message,
            code: code.to_string(),
            coherence: COHERENCE,
        };

        (status, Json(body)).into_response()
    }
}

/// Convert a caught handler panic into a 500 error body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(detail).into_response()
}
