//! Request bodies for the POST routes.
//!
//! Required fields are modelled as `Option` so that an absent field reaches
//! the guard and produces a `MissingField` error instead of a decode failure.
//! Unknown keys (clients still send a `context` object) are ignored.

use serde::Deserialize;

/// Body of `POST /verify`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyRequest {
    pub target: Option<String>,
}

/// Body of `POST /nbcl/interpret`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterpretRequest {
    pub command: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_request_without_target() {
        let req: VerifyRequest = serde_json::from_str("{}").unwrap();
        assert!(req.target.is_none());
    }

    #[test]
    fn test_interpret_request_ignores_context() {
        let req: InterpretRequest =
            serde_json::from_str(r#"{"command": "/ignite", "context": {"depth": 3}}"#).unwrap();
        assert_eq!(req.command.as_deref(), Some("/ignite"));
    }

    #[test]
    fn test_verify_request_rejects_non_string_target() {
        assert!(serde_json::from_str::<VerifyRequest>(r#"{"target": 42}"#).is_err());
    }
}
