//! POST /verify - Universal verification of a named target.

use axum::Json;
use chrono::Utc;

use blitz_core::{guard, payload};
use blitz_types::payload::VerifyPayload;
use blitz_types::request::VerifyRequest;

use crate::http::error::AppError;
use crate::http::extractors::body::JsonBody;

/// POST /verify
///
/// `target` is required; a missing or empty value answers 400
/// `"Target required"`.
pub async fn verify_target(
    JsonBody(body): JsonBody<VerifyRequest>,
) -> Result<Json<VerifyPayload>, AppError> {
    let subject = guard::require_field("target", body.target)?;

    tracing::debug!(%subject, "verifying target");

    Ok(Json(payload::verify(subject, Utc::now())))
}
