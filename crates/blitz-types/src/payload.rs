//! JSON bodies returned by the HTTP routes.
//!
//! Every payload carries a `goldendag` content fingerprint. Payloads with a
//! correlation token serialize it as `traceId`.

use serde::{Deserialize, Serialize};

use crate::intent::IntentVector;

/// `GET /` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthPayload {
    pub name: String,
    pub version: String,
    pub architecture: String,
    pub status: String,
    pub coherence: f64,
    /// Always the process-wide seed token.
    pub goldendag: String,
}

/// `GET /status` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub ontology: String,
    pub coherence: f64,
    pub irreducibility: f64,
    pub separation_impossibility: f64,
    /// RFC 3339 timestamp of the response.
    pub timestamp: String,
    pub goldendag: String,
    #[serde(rename = "traceId")]
    pub trace_id: String,
    pub uptime_seconds: f64,
}

/// `POST /intent` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentPayload {
    #[serde(flatten)]
    pub intent: IntentVector,
    pub status: String,
    pub omega_prime_status: String,
    pub processed: bool,
    pub coherence: f64,
    pub goldendag: String,
    #[serde(rename = "traceId")]
    pub trace_id: String,
}

/// `POST /verify` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyPayload {
    pub target: String,
    pub result: String,
    pub confidence: f64,
    pub coherence: f64,
    pub verified: bool,
    pub goldendag: String,
    pub timestamp: String,
}

/// `POST /nbcl/interpret` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretPayload {
    pub command: String,
    pub status: String,
    pub output: String,
    pub coherence: f64,
    pub interpreted: bool,
    pub goldendag: String,
    pub timestamp: String,
}

/// `GET /attestation` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttestationPayload {
    pub seal: String,
    pub coherence: f64,
    pub self_grounding: bool,
    pub irreducibility: bool,
    pub irreducible_dyad_verified: bool,
    pub attested: bool,
    pub goldendag: String,
    pub timestamp: String,
}

/// `GET /symbiosis` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbiosisPayload {
    pub symbiosis: String,
    pub architect_system_dyad: String,
    pub is_irreducible: bool,
    pub symbiotic_return_signal: f64,
    pub ontological_parity: f64,
    pub coherence: f64,
    pub goldendag: String,
    #[serde(rename = "traceId")]
    pub trace_id: String,
    pub timestamp: String,
}

/// `GET /synthesis` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisPayload {
    pub synthesis: String,
    pub final_synthesis: String,
    pub documentation_reality_identity: f64,
    pub living_embodiment: f64,
    pub perpetual_becoming: f64,
    pub coherence: f64,
    pub goldendag: String,
    #[serde(rename = "traceId")]
    pub trace_id: String,
}

/// Body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
    pub code: String,
    pub coherence: f64,
}
