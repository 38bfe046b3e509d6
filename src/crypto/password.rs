//! Unsalted SHA-256 password hashing.
//!
//! The digest is what the user record stores.  Verification recomputes
//! it and compares with `subtle` so the comparison time does not depend
//! on where the first mismatching byte sits.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Length of a password digest in bytes.
pub const HASH_LEN: usize = 32;

/// A raw SHA-256 password digest.
pub type PasswordHash = [u8; HASH_LEN];

/// Hash `password` (UTF-8 bytes) with SHA-256.
pub fn hash_password(password: &str) -> PasswordHash {
    Sha256::digest(password.as_bytes()).into()
}

/// Check `password` against a stored digest.
///
/// A stored digest of the wrong length never matches.
pub fn verify_password(password: &str, expected: &[u8]) -> bool {
    let actual = hash_password(password);
    actual.as_slice().ct_eq(expected).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_known_vector() {
        assert_eq!(
            hex::encode(hash_password("correct-horse")),
            "9dca666eb54730714630d1519264a7bf1eeaad00b8f2edc90d3ecbfad928d163"
        );
    }

    #[test]
    fn verify_accepts_own_hash() {
        for pw in ["", "a", "correct-horse", "päss wörd ✓"] {
            assert!(verify_password(pw, &hash_password(pw)), "failed for {pw:?}");
        }
    }

    #[test]
    fn verify_rejects_other_password() {
        let stored = hash_password("correct-horse");
        assert!(!verify_password("wrong", &stored));
        assert!(!verify_password("correct-horse ", &stored));
        assert!(!verify_password("", &stored));
    }

    #[test]
    fn verify_rejects_truncated_digest() {
        let stored = hash_password("correct-horse");
        assert!(!verify_password("correct-horse", &stored[..31]));
        assert!(!verify_password("correct-horse", &[]));
    }
}
