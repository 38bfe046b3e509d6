use thiserror::Error;

/// All errors that can occur in SecureFiles.
#[derive(Debug, Error)]
pub enum SecureFilesError {
    // --- Crypto errors ---
    #[error("Crypto error: {0}")]
    Crypto(String),

    // --- Credential errors ---
    #[error("User record is corrupted: {0}")]
    CorruptState(String),

    #[error("Invalid value for {0}")]
    InvalidField(String),

    #[error("No user registered yet — run `securefiles signup` first")]
    NotRegistered,

    #[error("A user is already registered — use `securefiles profile` to change it")]
    AlreadyRegistered,

    #[error("Authentication failed — incorrect password")]
    AuthenticationFailed,

    // --- Vault errors ---
    #[error("Artifact '{0}' not found in the vault")]
    ArtifactNotFound(String),

    // --- Network errors ---
    #[error("Network error: {0}")]
    Network(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for SecureFiles results.
pub type Result<T> = std::result::Result<T, SecureFilesError>;
