//! NBHS-1024 composite fingerprint.
//!
//! SHA3-512 digests over the input (two of them with a fixed suffix) are
//! concatenated as lowercase hex and truncated to 256 characters:
//!
//! | part | digest                          | hex chars kept |
//! |------|---------------------------------|----------------|
//! | 1    | SHA3-512(data)                  | 128            |
//! | 2    | SHA3-512(data ‖ "RIPEMD")       | 80             |
//! | 3    | SHA3-512(data ‖ "BLAKE3")       | 48             |

use sha3::{Digest, Sha3_512};

/// Length of every token returned by [`nbhs_1024`].
pub const NBHS_HEX_LEN: usize = 256;

fn sha3_512_hex(data: &[u8], suffix: &[u8]) -> String {
    let mut hasher = Sha3_512::new();
    hasher.update(data);
    hasher.update(suffix);
    format!("{:x}", hasher.finalize())
}

/// Compute the 1024-bit NBHS fingerprint of `data` as 256 hex characters.
pub fn nbhs_1024(data: &[u8]) -> String {
    let ripemd_sim = sha3_512_hex(data, b"RIPEMD");

    let mut combined = String::with_capacity(NBHS_HEX_LEN + 128);
    combined.push_str(&sha3_512_hex(data, b""));
    combined.push_str(&ripemd_sim[..80]);
    combined.push_str(&sha3_512_hex(data, b"BLAKE3"));

    combined.truncate(NBHS_HEX_LEN);
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nbhs_has_fixed_length() {
        assert_eq!(nbhs_1024(b"").len(), NBHS_HEX_LEN);
        assert_eq!(nbhs_1024(&[7u8; 4096]).len(), NBHS_HEX_LEN);
    }

    #[test]
    fn nbhs_is_deterministic_lowercase_hex() {
        let a = nbhs_1024(b"omega");
        let b = nbhs_1024(b"omega");
        assert_eq!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn nbhs_starts_with_sha3_512() {
        let token = nbhs_1024(b"abc");
        // SHA3-512("abc")
        assert!(token.starts_with(
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
             10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
        ));
    }

    #[test]
    fn nbhs_known_answer() {
        assert_eq!(
            nbhs_1024(b"abc"),
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
             10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0\
             12a8d42f47d31dc907e1eb4167afcb416834cc250ee81d5ddc6284f1d5f70a13\
             b23f0cade61195a24f4e3d525b8b805c334382404fbafaf05f37e07c327cc152"
        );
    }

    #[test]
    fn nbhs_distinguishes_inputs() {
        assert_ne!(nbhs_1024(b"status"), nbhs_1024(b"synthesis"));
    }
}
