//! Cryptographic primitives for SecureFiles.
//!
//! This module provides:
//! - SHA-256 key derivation from a password (`kdf`)
//! - SHA-256 password hashing with constant-time verification (`password`)
//! - AES-128 block encryption of whole buffers (`cipher`)

pub mod cipher;
pub mod kdf;
pub mod password;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use cipher::{decrypt, encrypt};
pub use kdf::{derive_key, DerivedKey, KEY_LEN};
pub use password::{hash_password, verify_password, PasswordHash, HASH_LEN};
