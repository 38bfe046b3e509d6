//! Vault module — encrypted file storage.
//!
//! This module provides:
//! - The `Artifact` descriptor and `.enc` naming helpers (`artifact`)
//! - Whole-file encryption and decryption (`file_cipher`)
//! - The `Vault` directory handle and file management (`store`)

pub mod artifact;
pub mod file_cipher;
pub mod store;

// Re-export the most commonly used items.
pub use artifact::{Artifact, ARTIFACT_SUFFIX};
pub use file_cipher::{decrypt_artifact, decrypt_many, encrypt_file};
pub use store::{delete_artifact, move_artifact, rename_artifact, Vault};
