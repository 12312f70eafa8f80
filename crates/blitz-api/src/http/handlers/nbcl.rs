//! POST /nbcl/interpret - Interpret an NBCL command string.

use axum::Json;
use chrono::Utc;

use blitz_core::{guard, payload};
use blitz_types::payload::InterpretPayload;
use blitz_types::request::InterpretRequest;

use crate::http::error::AppError;
use crate::http::extractors::body::JsonBody;

/// POST /nbcl/interpret
///
/// `command` is required. The response fingerprint is the GoldenDAG token of
/// the command text.
pub async fn interpret(
    JsonBody(body): JsonBody<InterpretRequest>,
) -> Result<Json<InterpretPayload>, AppError> {
    let command = guard::require_field("command", body.command)?;

    tracing::debug!(command_len = command.len(), "interpreting NBCL command");

    Ok(Json(payload::interpret(command, Utc::now())))
}
