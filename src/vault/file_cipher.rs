//! Whole-file encryption into the vault and decryption back out.
//!
//! Each call derives the key from the password again; nothing is cached.
//! Encryption reads the full source into memory and writes one artifact.
//! Decryption writes the plaintext next to the artifact and leaves the
//! artifact in place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::crypto::{decrypt, derive_key, encrypt};
use crate::errors::Result;

use super::artifact::{artifact_name_for, strip_artifact_suffix};

/// Encrypt `source` into `<vault_dir>/<basename(source)>.enc`.
///
/// Overwrites any artifact with the same name and returns its path.
/// `vault_dir` must already exist.
pub fn encrypt_file(password: &str, source: &Path, vault_dir: &Path) -> Result<PathBuf> {
    let base_name = source.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", source.display()),
        )
    })?;

    let key = derive_key(password);
    let plaintext = Zeroizing::new(fs::read(source)?);
    let ciphertext = encrypt(key.as_bytes(), &plaintext)?;

    let artifact_path = vault_dir.join(artifact_name_for(&base_name.to_string_lossy()));
    fs::write(&artifact_path, ciphertext)?;

    tracing::debug!(
        source = %source.display(),
        artifact = %artifact_path.display(),
        "encrypted file"
    );
    Ok(artifact_path)
}

/// Decrypt `artifact` next to itself, dropping the `.enc` suffix.
///
/// Returns `None` on any failure: wrong password, corrupted or truncated
/// ciphertext and I/O errors all look the same to the caller.
pub fn decrypt_artifact(password: &str, artifact: &Path) -> Option<PathBuf> {
    match try_decrypt_artifact(password, artifact) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::debug!(artifact = %artifact.display(), error = %e, "decrypt failed");
            None
        }
    }
}

fn try_decrypt_artifact(password: &str, artifact: &Path) -> Result<PathBuf> {
    let file_name = artifact.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", artifact.display()),
        )
    })?;
    let file_name = file_name.to_string_lossy();

    let key = derive_key(password);
    let ciphertext = fs::read(artifact)?;
    let plaintext = Zeroizing::new(decrypt(key.as_bytes(), &ciphertext)?);

    let parent = artifact.parent().unwrap_or_else(|| Path::new(""));
    let output = parent.join(strip_artifact_suffix(&file_name));
    fs::write(&output, plaintext.as_slice())?;

    tracing::debug!(
        artifact = %artifact.display(),
        output = %output.display(),
        "decrypted artifact"
    );
    Ok(output)
}

/// Decrypt every artifact in `artifacts`, in order.
///
/// One result per input; a failed artifact does not stop the rest.
pub fn decrypt_many<P: AsRef<Path>>(password: &str, artifacts: &[P]) -> Vec<Option<PathBuf>> {
    artifacts
        .iter()
        .map(|a| decrypt_artifact(password, a.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn encrypt_then_decrypt_in_place() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("notes.txt");
        fs::write(&source, b"meet at noon").unwrap();
        let vault = dir.path().join("vault");
        fs::create_dir(&vault).unwrap();

        let artifact = encrypt_file("pw", &source, &vault).unwrap();
        assert_eq!(artifact, vault.join("notes.txt.enc"));
        assert_ne!(fs::read(&artifact).unwrap(), b"meet at noon");

        let out = decrypt_artifact("pw", &artifact).unwrap();
        assert_eq!(out, vault.join("notes.txt"));
        assert_eq!(fs::read(&out).unwrap(), b"meet at noon");
        assert!(artifact.exists(), "artifact must survive decryption");
    }

    #[test]
    fn encrypt_missing_source_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = encrypt_file("pw", &dir.path().join("nope.txt"), dir.path()).unwrap_err();
        assert!(matches!(err, crate::errors::SecureFilesError::Io(_)));
    }

    #[test]
    fn encrypt_into_missing_vault_dir_is_io_error() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("a.txt");
        fs::write(&source, b"x").unwrap();
        let err = encrypt_file("pw", &source, &dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, crate::errors::SecureFilesError::Io(_)));
    }

    #[test]
    fn decrypt_missing_artifact_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(decrypt_artifact("pw", &dir.path().join("ghost.enc")).is_none());
    }
}
