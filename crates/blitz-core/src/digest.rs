//! GoldenDAG digest generation.
//!
//! `generate` maps any string to a 64-character lowercase hex token:
//! SHA-256 over the origin signature followed by the input bytes. The mapping
//! is pure, so the same input yields the same token in every process.
//!
//! [`SEED`] is `generate(ORIGIN_SIGNATURE)`, computed on first access and
//! shared read-only for the lifetime of the process.

use std::sync::LazyLock;

use sha2::{Digest, Sha256};

/// Fixed origin signature. Prefixed to every digest input and hashed on its
/// own to produce [`SEED`].
pub const ORIGIN_SIGNATURE: &str =
    "a8d0f2a4c6b8d0f2a4c6b8d0f2a4c6b8d0f2a4c6b8d0f2a4c6b8d0f2a4c6b8d0";

/// Length of every token returned by [`generate`].
pub const DIGEST_HEX_LEN: usize = 64;

/// Process-wide seed token.
pub static SEED: LazyLock<String> = LazyLock::new(|| generate(ORIGIN_SIGNATURE));

/// Borrow the seed token.
pub fn seed() -> &'static str {
    SEED.as_str()
}

/// Compute the GoldenDAG token for `input`.
///
/// Accepts any string, including the empty string. Never fails.
pub fn generate(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(ORIGIN_SIGNATURE.as_bytes());
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Whether `token` has the shape of a GoldenDAG token: exactly 64 ASCII hex
/// digits. Upper-case digits are accepted.
pub fn validate(token: &str) -> bool {
    token.len() == DIGEST_HEX_LEN && token.bytes().all(|b| b.is_ascii_hexdigit())
}
