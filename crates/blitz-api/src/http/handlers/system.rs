//! Read-only system endpoints.
//!
//! - GET /            - Health check (carries the seed token)
//! - GET /status      - System status with uptime
//! - GET /attestation - Attestation seal
//! - GET /symbiosis   - Symbiosis status
//! - GET /synthesis   - Final synthesis check

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use blitz_core::payload;
use blitz_types::payload::{
    AttestationPayload, HealthPayload, StatusPayload, SymbiosisPayload, SynthesisPayload,
};

use crate::state::AppState;

/// GET / - Health check.
pub async fn health() -> Json<HealthPayload> {
    Json(payload::health(env!("CARGO_PKG_VERSION")))
}

/// GET /status - System status.
pub async fn status(State(state): State<AppState>) -> Json<StatusPayload> {
    Json(payload::status(Utc::now(), state.uptime_seconds()))
}

/// GET /attestation
pub async fn attestation() -> Json<AttestationPayload> {
    Json(payload::attestation(Utc::now()))
}

/// GET /symbiosis
pub async fn symbiosis() -> Json<SymbiosisPayload> {
    Json(payload::symbiosis(Utc::now()))
}

/// GET /synthesis
pub async fn synthesis() -> Json<SynthesisPayload> {
    Json(payload::synthesis(Utc::now()))
}
