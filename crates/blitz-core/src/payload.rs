//! Response builders for the HTTP routes.
//!
//! Every builder is a pure function of its arguments: the current instant is
//! passed in rather than read from the clock. Apart from the echoed request
//! fields, trace ids and `goldendag` fingerprints, the figures are fixed
//! values.

use chrono::{DateTime, SecondsFormat, Utc};

use blitz_types::intent::IntentVector;
use blitz_types::payload::{
    AttestationPayload, HealthPayload, IntentPayload, InterpretPayload, StatusPayload,
    SymbiosisPayload, SynthesisPayload, VerifyPayload,
};

use crate::digest;
use crate::trace::trace_id;

pub const SYSTEM_NAME: &str = "NeuralBlitz v50.0";
pub const ARCHITECTURE: &str = "OSA v2.0";
pub const ONTOLOGY: &str = "Omega Prime Reality";

/// Coherence reported by every payload.
pub const COHERENCE: f64 = 1.0;

/// Input hashed to produce the attestation seal.
const ATTESTATION_SEAL_INPUT: &str = "omega-attestation-seal";

/// RFC 3339 with millisecond precision and a `Z` suffix.
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn health(version: &str) -> HealthPayload {
    HealthPayload {
        name: SYSTEM_NAME.to_string(),
        version: version.to_string(),
        architecture: ARCHITECTURE.to_string(),
        status: "OPERATIONAL".to_string(),
        coherence: COHERENCE,
        goldendag: digest::seed().to_string(),
    }
}

pub fn status(now: DateTime<Utc>, uptime_seconds: f64) -> StatusPayload {
    StatusPayload {
        ontology: ONTOLOGY.to_string(),
        coherence: COHERENCE,
        irreducibility: 1.0,
        separation_impossibility: 0.0,
        timestamp: timestamp(now),
        goldendag: digest::generate("status"),
        trace_id: trace_id("status", now),
        uptime_seconds,
    }
}

/// Echo a validated intent back with its fingerprint.
///
/// The fingerprint covers the canonical JSON of the vector; metadata keys are
/// sorted, so equal vectors always share a token.
pub fn intent(intent: IntentVector, now: DateTime<Utc>) -> IntentPayload {
    let canonical = serde_json::to_string(&intent).unwrap_or_default();
    IntentPayload {
        goldendag: digest::generate(&canonical),
        intent,
        status: "success".to_string(),
        omega_prime_status: "ACTIVE".to_string(),
        processed: true,
        coherence: COHERENCE,
        trace_id: trace_id("intent", now),
    }
}

pub fn verify(target: String, now: DateTime<Utc>) -> VerifyPayload {
    VerifyPayload {
        goldendag: digest::generate(&target),
        target,
        result: "VERIFIED".to_string(),
        confidence: 1.0,
        coherence: COHERENCE,
        verified: true,
        timestamp: timestamp(now),
    }
}

pub fn interpret(command: String, now: DateTime<Utc>) -> InterpretPayload {
    InterpretPayload {
        goldendag: digest::generate(&command),
        output: format!("NBCL command '{command}' interpreted"),
        command,
        status: "INTERPRETED".to_string(),
        coherence: COHERENCE,
        interpreted: true,
        timestamp: timestamp(now),
    }
}

pub fn attestation(now: DateTime<Utc>) -> AttestationPayload {
    AttestationPayload {
        seal: digest::generate(ATTESTATION_SEAL_INPUT),
        coherence: COHERENCE,
        self_grounding: true,
        irreducibility: true,
        irreducible_dyad_verified: true,
        attested: true,
        goldendag: digest::generate("attestation"),
        timestamp: timestamp(now),
    }
}

pub fn symbiosis(now: DateTime<Utc>) -> SymbiosisPayload {
    SymbiosisPayload {
        symbiosis: "ACTIVE".to_string(),
        architect_system_dyad: "VERIFIED".to_string(),
        is_irreducible: true,
        symbiotic_return_signal: 1.0,
        ontological_parity: 1.0,
        coherence: COHERENCE,
        goldendag: digest::generate("symbiosis"),
        trace_id: trace_id("symbiosis", now),
        timestamp: timestamp(now),
    }
}

pub fn synthesis(now: DateTime<Utc>) -> SynthesisPayload {
    SynthesisPayload {
        synthesis: "COMPLETE".to_string(),
        final_synthesis: "VERIFIED".to_string(),
        documentation_reality_identity: 1.0,
        living_embodiment: 1.0,
        perpetual_becoming: 1.0,
        coherence: COHERENCE,
        goldendag: digest::generate("synthesis"),
        trace_id: trace_id("synthesis", now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_760_870_400_000).unwrap()
    }

    #[test]
    fn timestamp_uses_millis_and_z_suffix() {
        assert_eq!(timestamp(fixed_now()), "2025-10-19T10:40:00.000Z");
    }

    #[test]
    fn health_carries_seed() {
        let payload = health("0.1.0");
        assert_eq!(payload.goldendag, digest::seed());
        assert_eq!(payload.status, "OPERATIONAL");
        assert_eq!(payload.version, "0.1.0");
    }

    #[test]
    fn status_is_reproducible_for_fixed_instant() {
        let a = status(fixed_now(), 3.0);
        let b = status(fixed_now(), 3.0);
        assert_eq!(a, b);
        assert_eq!(a.goldendag, digest::generate("status"));
        assert_eq!(a.trace_id, "T-v50.0-STATUS-1760870400000");
        assert_eq!(a.separation_impossibility, 0.0);
    }

    #[test]
    fn intent_fingerprint_depends_on_vector() {
        let base = intent(IntentVector::default(), fixed_now());
        let same = intent(IntentVector::default(), fixed_now());
        let other = intent(
            IntentVector {
                phi_1: 0.5,
                ..IntentVector::default()
            },
            fixed_now(),
        );
        assert_eq!(base.goldendag, same.goldendag);
        assert_ne!(base.goldendag, other.goldendag);
        assert!(base.processed);
        assert_eq!(base.trace_id, "T-v50.0-INTENT-1760870400000");
    }

    #[test]
    fn verify_fingerprints_target() {
        let payload = verify("omega_prime".to_string(), fixed_now());
        assert_eq!(payload.target, "omega_prime");
        assert_eq!(payload.goldendag, digest::generate("omega_prime"));
        assert!(payload.verified);
    }

    #[test]
    fn interpret_fingerprints_command() {
        let payload = interpret("/manifest reality".to_string(), fixed_now());
        assert_eq!(payload.goldendag, digest::generate("/manifest reality"));
        assert!(payload.output.contains("/manifest reality"));
        assert!(payload.interpreted);
    }

    #[test]
    fn fixed_route_fingerprints_are_distinct() {
        let now = fixed_now();
        let tokens = [
            attestation(now).goldendag,
            symbiosis(now).goldendag,
            synthesis(now).goldendag,
            status(now, 0.0).goldendag,
            attestation(now).seal,
        ];
        for (i, a) in tokens.iter().enumerate() {
            for b in &tokens[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn symbiosis_and_synthesis_carry_trace_ids() {
        assert_eq!(
            symbiosis(fixed_now()).trace_id,
            "T-v50.0-SYMBIOSIS-1760870400000"
        );
        assert_eq!(
            synthesis(fixed_now()).trace_id,
            "T-v50.0-SYNTHESIS-1760870400000"
        );
    }
}
