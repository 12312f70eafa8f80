//! Lenient JSON body extractor.
//!
//! Unlike `axum::Json`, an empty body decodes to `T::default()` and the
//! `Content-Type` header is not checked, so a bare `POST /verify` reaches the
//! field guard and is answered with `"Target required"`.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use blitz_types::error::RequestError;

use crate::http::error::AppError;

/// Request body decoded from JSON, defaulting when empty.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| RequestError::Malformed(e.body_text()))?;
        Ok(JsonBody(parse_body(&bytes)?))
    }
}

/// Decode `bytes` as JSON; whitespace-only input yields `T::default()`.
pub fn parse_body<T>(bytes: &[u8]) -> Result<T, RequestError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(bytes).map_err(|e| RequestError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use blitz_types::request::VerifyRequest;

    use super::*;

    #[test]
    fn empty_body_defaults() {
        let req: VerifyRequest = parse_body(b"").unwrap();
        assert!(req.target.is_none());
        let req: VerifyRequest = parse_body(b"  \n").unwrap();
        assert!(req.target.is_none());
    }

    #[test]
    fn json_body_decodes() {
        let req: VerifyRequest = parse_body(br#"{"target": "omega_prime"}"#).unwrap();
        assert_eq!(req.target.as_deref(), Some("omega_prime"));
    }

    #[test]
    fn malformed_body_is_rejected() {
        let err = parse_body::<VerifyRequest>(b"{not json").unwrap_err();
        assert!(matches!(err, RequestError::Malformed(_)));
    }
}
