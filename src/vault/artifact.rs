//! The `Artifact` descriptor returned by the vault directory index.
//!
//! An artifact is an encrypted file named `<original>.enc`.  Nothing
//! besides the ciphertext is stored, so the original file name is
//! recovered by stripping the suffix.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// File name suffix carried by every encrypted artifact.
pub const ARTIFACT_SUFFIX: &str = ".enc";

/// Lightweight metadata about one encrypted file in the vault.
#[derive(Debug, Clone, Serialize)]
pub struct Artifact {
    /// Full path to the artifact on disk.
    pub path: PathBuf,

    /// Artifact file name, including the `.enc` suffix.
    pub file_name: String,

    /// Name the plaintext will get when decrypted.
    pub original_name: String,

    /// Ciphertext size in bytes.
    pub size: u64,

    /// Last modification time, if the filesystem reports one.
    pub modified: Option<DateTime<Utc>>,
}

impl Artifact {
    /// Build a descriptor for `path` by reading its metadata.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let meta = fs::metadata(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            original_name: strip_artifact_suffix(&file_name).to_string(),
            file_name,
            size: meta.len(),
            modified: meta.modified().ok().map(DateTime::<Utc>::from),
        })
    }
}

/// Returns true if `name` carries the artifact suffix.
pub fn is_artifact_name(name: &str) -> bool {
    name.ends_with(ARTIFACT_SUFFIX)
}

/// Strip the artifact suffix from `name`.
///
/// Names without the suffix come back unchanged.
pub fn strip_artifact_suffix(name: &str) -> &str {
    name.strip_suffix(ARTIFACT_SUFFIX).unwrap_or(name)
}

/// Artifact file name for a plaintext base name (`report.pdf` → `report.pdf.enc`).
pub fn artifact_name_for(base_name: &str) -> String {
    format!("{base_name}{ARTIFACT_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_helpers() {
        assert!(is_artifact_name("report.pdf.enc"));
        assert!(!is_artifact_name("report.pdf"));
        assert!(!is_artifact_name("report.enc.bak"));
        assert_eq!(strip_artifact_suffix("report.pdf.enc"), "report.pdf");
        assert_eq!(strip_artifact_suffix("notes.txt"), "notes.txt");
        assert_eq!(artifact_name_for("report.pdf"), "report.pdf.enc");
    }

    #[test]
    fn from_path_reads_metadata() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("photo.jpg.enc");
        fs::write(&path, [0u8; 48]).unwrap();

        let artifact = Artifact::from_path(&path).unwrap();
        assert_eq!(artifact.file_name, "photo.jpg.enc");
        assert_eq!(artifact.original_name, "photo.jpg");
        assert_eq!(artifact.size, 48);
        assert!(artifact.modified.is_some());
    }
}
