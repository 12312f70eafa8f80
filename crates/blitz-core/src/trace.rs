//! Trace identifiers attached to time-sensitive responses.
//!
//! Format: `T-<version>-<CONTEXT>-<unix millis>`, e.g.
//! `T-v50.0-STATUS-1760870400000`.

use chrono::{DateTime, Utc};

/// Version tag embedded in every trace id.
pub const TRACE_VERSION: &str = "v50.0";

/// Build a trace id for `context` at instant `at`. The context is upper-cased.
pub fn trace_id(context: &str, at: DateTime<Utc>) -> String {
    format!(
        "T-{TRACE_VERSION}-{}-{}",
        context.to_ascii_uppercase(),
        at.timestamp_millis()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_id_format() {
        let at = DateTime::from_timestamp_millis(1_760_870_400_123).unwrap();
        assert_eq!(trace_id("status", at), "T-v50.0-STATUS-1760870400123");
    }

    #[test]
    fn test_trace_id_keeps_upper_case_context() {
        let at = DateTime::from_timestamp_millis(0).unwrap();
        assert_eq!(trace_id("SYNTHESIS", at), "T-v50.0-SYNTHESIS-0");
    }
}
