//! Password-based key derivation using a single SHA-256 pass.
//!
//! The key is the first 16 bytes of `SHA-256(password)`.  There is no
//! salt and no iteration count, so the same password always yields the
//! same key and an offline guess costs one hash.  Files encrypted by
//! earlier releases depend on this exact derivation, so it cannot be
//! strengthened without a migration path.

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Length of the derived key in bytes (128 bits, for AES-128).
pub const KEY_LEN: usize = 16;

/// A 16-byte AES key that zeroes its memory when dropped.
///
/// Never persisted.  Every encrypt/decrypt call derives a fresh one
/// from the password and drops it when done.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Access the raw key bytes (e.g. to initialise the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// Derive the AES-128 key for `password`.
///
/// Pure and infallible; the empty string hashes like any other string.
pub fn derive_key(password: &str) -> DerivedKey {
    let mut digest: [u8; 32] = Sha256::digest(password.as_bytes()).into();

    let mut bytes = [0u8; KEY_LEN];
    bytes.copy_from_slice(&digest[..KEY_LEN]);
    digest.zeroize();

    DerivedKey { bytes }
}
