use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SecureFilesError};

/// Name of the vault directory created under the home directory.
const DEFAULT_VAULT_DIR_NAME: &str = "MySecureFiles";

/// Application configuration, loaded from `.securefiles.toml`.
///
/// Every field has a sensible default so SecureFiles works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding encrypted artifacts (default: `~/MySecureFiles`).
    /// A leading `~/` is expanded to the home directory.
    #[serde(default)]
    pub vault_dir: Option<String>,

    /// User record file, relative to the working directory (default: `user.dat`).
    #[serde(default = "default_user_file")]
    pub user_file: String,

    /// Consecutive failed logins before a password reset is offered (default: 3).
    #[serde(default = "default_max_failed_attempts")]
    pub max_failed_attempts: u32,

    /// Port used by `serve` and `fetch` when none is given (default: 5000).
    #[serde(default = "default_transfer_port")]
    pub transfer_port: u16,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_user_file() -> String {
    "user.dat".to_string()
}

fn default_max_failed_attempts() -> u32 {
    crate::account::DEFAULT_MAX_FAILED_ATTEMPTS
}

fn default_transfer_port() -> u16 {
    5000
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: None,
            user_file: default_user_file(),
            max_failed_attempts: default_max_failed_attempts(),
            transfer_port: default_transfer_port(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".securefiles.toml";

    /// Load settings from `<project_dir>/.securefiles.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SecureFilesError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        if settings.max_failed_attempts == 0 {
            return Err(SecureFilesError::ConfigError(
                "max_failed_attempts must be at least 1".into(),
            ));
        }

        Ok(settings)
    }

    /// Resolve the vault directory.
    ///
    /// Falls back to `<home>/MySecureFiles`; fails only when no home
    /// directory can be found and none is configured.
    pub fn vault_dir(&self) -> Result<PathBuf> {
        match &self.vault_dir {
            Some(dir) => expand_home(dir),
            None => home_dir().map(|home| home.join(DEFAULT_VAULT_DIR_NAME)),
        }
    }

    /// Build the full path to the user record file.
    ///
    /// Example: `project_dir/user.dat`
    pub fn user_file(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.user_file)
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| SecureFilesError::ConfigError("cannot determine home directory".into()))
}

fn expand_home(dir: &str) -> Result<PathBuf> {
    match dir.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None if dir == "~" => home_dir(),
        None => Ok(PathBuf::from(dir)),
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert!(s.vault_dir.is_none());
        assert_eq!(s.user_file, "user.dat");
        assert_eq!(s.max_failed_attempts, 3);
        assert_eq!(s.transfer_port, 5000);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.user_file, "user.dat");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
vault_dir = "/srv/vault"
user_file = "profile.dat"
max_failed_attempts = 5
transfer_port = 6000
"#;
        fs::write(tmp.path().join(".securefiles.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir().unwrap(), PathBuf::from("/srv/vault"));
        assert_eq!(settings.user_file, "profile.dat");
        assert_eq!(settings.max_failed_attempts, 5);
        assert_eq!(settings.transfer_port, 6000);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".securefiles.toml"), "transfer_port = 7000\n").unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.transfer_port, 7000);
        assert_eq!(settings.user_file, "user.dat");
        assert_eq!(settings.max_failed_attempts, 3);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".securefiles.toml"), "not valid {{toml").unwrap();
        assert!(Settings::load(tmp.path()).is_err());
    }

    #[test]
    fn load_rejects_zero_attempts() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(".securefiles.toml"),
            "max_failed_attempts = 0\n",
        )
        .unwrap();
        assert!(Settings::load(tmp.path()).is_err());
    }

    #[test]
    fn user_file_is_relative_to_project_dir() {
        let s = Settings::default();
        assert_eq!(
            s.user_file(Path::new("/home/user/work")),
            PathBuf::from("/home/user/work/user.dat")
        );
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            let s = Settings {
                vault_dir: Some("~/vaults/main".into()),
                ..Settings::default()
            };
            assert_eq!(s.vault_dir().unwrap(), home.join("vaults/main"));
        }
    }
}
