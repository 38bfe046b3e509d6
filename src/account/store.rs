//! Load and save the single user record.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::{Result, SecureFilesError};

use super::record::UserRecord;

/// Reads and writes the user record at a fixed path.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the user record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the registered user.
    ///
    /// Returns `Ok(None)` when no record exists yet.  A record that exists
    /// but cannot be parsed is a `CorruptState` error; there is no
    /// fallback for it.
    pub fn load(&self) -> Result<Option<UserRecord>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let text = String::from_utf8(bytes)
            .map_err(|e| SecureFilesError::CorruptState(format!("not valid UTF-8: {e}")))?;

        UserRecord::parse(&text).map(Some)
    }

    /// Overwrite the record file with `user`.
    ///
    /// Not atomic: a crash mid-write can leave a truncated record.
    pub fn save(&self, user: &UserRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, user.to_line())?;
        tracing::debug!(path = %self.path.display(), "saved user record");
        Ok(())
    }

    /// Returns true if a record file is present.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
