//! POST /intent - Process a primal intent vector.
//!
//! Every coefficient is optional and defaults to 1.0; an empty body is
//! accepted. Out-of-range coefficients answer 400.

use axum::Json;
use chrono::Utc;

use blitz_core::{guard, payload};
use blitz_types::intent::IntentRequest;
use blitz_types::payload::IntentPayload;

use crate::http::error::AppError;
use crate::http::extractors::body::JsonBody;

/// POST /intent
pub async fn process_intent(
    JsonBody(body): JsonBody<IntentRequest>,
) -> Result<Json<IntentPayload>, AppError> {
    let intent = guard::intent_vector(body)?;
    let resp = payload::intent(intent, Utc::now());

    tracing::debug!(goldendag = %resp.goldendag, "intent processed");

    Ok(Json(resp))
}
