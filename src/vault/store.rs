//! High-level vault operations used by CLI commands.
//!
//! `Vault` wraps the storage directory so that the rest of the
//! application can work with simple method calls like
//! `vault.encrypt_file("pw", Path::new("report.pdf"))`.
//!
//! The file-management helpers (`delete_artifact`, `rename_artifact`,
//! `move_artifact`) report success as a plain `bool`; the underlying
//! error is only logged.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, SecureFilesError};

use super::artifact::{artifact_name_for, is_artifact_name, Artifact};
use super::file_cipher;

/// Handle to the storage directory holding encrypted artifacts.
#[derive(Debug, Clone)]
pub struct Vault {
    /// Directory containing `<name>.enc` files.
    dir: PathBuf,
}

impl Vault {
    /// Create a handle for `dir`.  Nothing is touched on disk yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the storage directory (and parents) if it is missing.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Directory index
    // ------------------------------------------------------------------

    /// List every artifact in the storage directory.
    ///
    /// Creates the directory first.  Only regular files whose name ends
    /// with `.enc` are returned, in directory-listing order.
    pub fn list_artifacts(&self) -> Result<Vec<Artifact>> {
        self.ensure_dir()?;

        let mut artifacts = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            if !is_artifact_name(&name.to_string_lossy()) {
                continue;
            }

            let path = entry.path();
            if !entry.file_type()?.is_file() {
                tracing::warn!(path = %path.display(), "skipping non-file entry with artifact suffix");
                continue;
            }

            if let Some(artifact) = artifact_entry(&path) {
                artifacts.push(artifact);
            }
        }

        Ok(artifacts)
    }

    /// Path an artifact named `name` would have in this vault.
    ///
    /// Accepts the name with or without the `.enc` suffix.
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        if is_artifact_name(name) {
            self.dir.join(name)
        } else {
            self.dir.join(artifact_name_for(name))
        }
    }

    /// Look up an existing artifact by name (with or without `.enc`).
    pub fn find_artifact(&self, name: &str) -> Result<Artifact> {
        let path = self.artifact_path(name);
        if !path.is_file() {
            return Err(SecureFilesError::ArtifactNotFound(name.to_string()));
        }
        Ok(Artifact::from_path(&path)?)
    }

    // ------------------------------------------------------------------
    // Encryption
    // ------------------------------------------------------------------

    /// Encrypt `source` into this vault, overwriting a previous artifact
    /// of the same name.  Returns the artifact path.
    pub fn encrypt_file(&self, password: &str, source: &Path) -> Result<PathBuf> {
        self.ensure_dir()?;
        file_cipher::encrypt_file(password, source, &self.dir)
    }

    /// Encrypt several files, one result per source.
    ///
    /// A failing source does not stop the rest of the batch.
    pub fn encrypt_many<P: AsRef<Path>>(
        &self,
        password: &str,
        sources: &[P],
    ) -> Vec<Result<PathBuf>> {
        sources
            .iter()
            .map(|s| self.encrypt_file(password, s.as_ref()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// File management
// ---------------------------------------------------------------------------

/// Delete the artifact at `path`.
pub fn delete_artifact(path: &Path) -> bool {
    match fs::remove_file(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "delete failed");
            false
        }
    }
}

/// Rename the artifact at `path` to `new_name` within the same directory.
pub fn rename_artifact(path: &Path, new_name: &str) -> bool {
    if new_name.is_empty() || new_name.contains(['/', '\\']) {
        tracing::debug!(new_name, "rename target is not a plain file name");
        return false;
    }

    let target = match path.parent() {
        Some(parent) => parent.join(new_name),
        None => PathBuf::from(new_name),
    };
    rename_logged(path, &target)
}

/// Move the artifact at `path` into `new_dir`, keeping its file name.
///
/// `new_dir` is created (with parents) if it does not exist.
pub fn move_artifact(path: &Path, new_dir: &Path) -> bool {
    let Some(file_name) = path.file_name() else {
        return false;
    };

    if let Err(e) = fs::create_dir_all(new_dir) {
        tracing::debug!(dir = %new_dir.display(), error = %e, "cannot create move target");
        return false;
    }

    rename_logged(path, &new_dir.join(file_name))
}

fn rename_logged(from: &Path, to: &Path) -> bool {
    match fs::rename(from, to) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(
                from = %from.display(),
                to = %to.display(),
                error = %e,
                "rename failed"
            );
            false
        }
    }
}

/// Describe one listed entry, or skip it if it went away mid-scan.
fn artifact_entry(path: &Path) -> Option<Artifact> {
    match Artifact::from_path(path) {
        Ok(artifact) => Some(artifact),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable vault entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn list_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let vault = Vault::new(tmp.path().join("deep").join("vault"));

        let artifacts = vault.list_artifacts().unwrap();
        assert!(artifacts.is_empty());
        assert!(vault.dir().is_dir());

        // Idempotent.
        assert!(vault.list_artifacts().unwrap().is_empty());
    }

    #[test]
    fn list_skips_directories_with_suffix() {
        let tmp = TempDir::new().unwrap();
        let vault = Vault::new(tmp.path());
        fs::create_dir(tmp.path().join("folder.enc")).unwrap();
        fs::write(tmp.path().join("real.txt.enc"), [0u8; 16]).unwrap();

        let names: Vec<String> = vault
            .list_artifacts()
            .unwrap()
            .into_iter()
            .map(|a| a.file_name)
            .collect();
        assert_eq!(names, vec!["real.txt.enc".to_string()]);
    }

    #[test]
    fn vanished_entry_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gone.txt.enc");
        fs::write(&path, [0u8; 16]).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(artifact_entry(&path).is_none());
    }

    #[test]
    fn artifact_path_accepts_either_form() {
        let vault = Vault::new("/vault");
        assert_eq!(vault.artifact_path("a.txt"), PathBuf::from("/vault/a.txt.enc"));
        assert_eq!(
            vault.artifact_path("a.txt.enc"),
            PathBuf::from("/vault/a.txt.enc")
        );
    }

    #[test]
    fn find_missing_artifact_fails() {
        let tmp = TempDir::new().unwrap();
        let vault = Vault::new(tmp.path());
        assert!(matches!(
            vault.find_artifact("nothing"),
            Err(SecureFilesError::ArtifactNotFound(_))
        ));
    }

    #[test]
    fn rename_rejects_path_separators() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.enc");
        fs::write(&path, b"x").unwrap();

        assert!(!rename_artifact(&path, "../escape.enc"));
        assert!(!rename_artifact(&path, ""));
        assert!(path.exists());
    }

    #[test]
    fn delete_missing_file_returns_false() {
        let tmp = TempDir::new().unwrap();
        assert!(!delete_artifact(&tmp.path().join("ghost.enc")));
    }
}
