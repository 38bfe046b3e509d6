//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use zeroize::Zeroizing;

use crate::account::{CredentialStore, LoginGate, LoginOutcome, UserRecord};
use crate::config::Settings;
use crate::errors::{Result, SecureFilesError};
use crate::vault::Vault;

/// Environment variable holding the vault password (scripted use).
pub const PASSWORD_ENV: &str = "SECUREFILES_PASSWORD";

/// Environment variable holding the replacement password for `reset-password`
/// and `profile --change-password`.
pub const NEW_PASSWORD_ENV: &str = "SECUREFILES_NEW_PASSWORD";

/// SecureFiles CLI: personal encrypted file vault.
#[derive(Parser)]
#[command(
    name = "securefiles",
    about = "Personal encrypted file vault with peer-to-peer file transfer",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: ~/MySecureFiles)
    #[arg(long, global = true)]
    pub vault_dir: Option<String>,

    /// User record file (default: user.dat in the working directory)
    #[arg(long, global = true)]
    pub user_file: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Register the vault's user
    Signup {
        /// Username (omit for interactive prompt)
        #[arg(long)]
        username: Option<String>,
        /// Security question used for password reset
        #[arg(long)]
        question: Option<String>,
        /// Answer to the security question
        #[arg(long)]
        answer: Option<String>,
    },

    /// Check the password (offers a reset after repeated failures)
    Login,

    /// Reset the password by answering the security question
    ResetPassword {
        /// Answer to the security question (omit for interactive prompt)
        #[arg(long)]
        answer: Option<String>,
    },

    /// Update username, security question/answer, or password
    Profile {
        /// New username
        #[arg(long)]
        username: Option<String>,
        /// New security question
        #[arg(long)]
        question: Option<String>,
        /// New security answer
        #[arg(long)]
        answer: Option<String>,
        /// Also choose a new password
        #[arg(long)]
        change_password: bool,
    },

    /// List encrypted files in the vault
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Encrypt files into the vault
    Encrypt {
        /// Files to encrypt
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Decrypt vault files next to their encrypted copies
    Decrypt {
        /// Artifact names (all artifacts when omitted)
        names: Vec<String>,
    },

    /// Delete an encrypted file from the vault
    Delete {
        /// Artifact name
        name: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Rename an encrypted file inside the vault
    Rename {
        /// Current artifact name
        name: String,
        /// New name (".enc" is appended if missing)
        new_name: String,
    },

    /// Move an encrypted file out of the vault into another directory
    Move {
        /// Artifact name
        name: String,
        /// Destination directory (created if missing)
        dir: PathBuf,
    },

    /// Send a file to the first peer that connects
    Serve {
        /// File to send
        file: PathBuf,
        /// Port to listen on (default: from config, 5000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Receive a file from a serving peer
    Fetch {
        /// Address of the serving peer
        address: String,
        /// Where to save the received file
        dest: PathBuf,
        /// Port to connect to (default: from config, 5000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show version
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolved locations and settings for one command invocation.
pub struct AppContext {
    pub settings: Settings,
    pub credentials: CredentialStore,
    pub vault: Vault,
}

impl AppContext {
    /// Load `.securefiles.toml` from the working directory and apply
    /// CLI overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let mut settings = Settings::load(&cwd)?;

        if let Some(dir) = &cli.vault_dir {
            settings.vault_dir = Some(dir.clone());
        }
        if let Some(file) = &cli.user_file {
            settings.user_file = file.clone();
        }

        let credentials = CredentialStore::new(settings.user_file(&cwd));
        let vault = Vault::new(settings.vault_dir()?);

        Ok(Self {
            settings,
            credentials,
            vault,
        })
    }

    /// Load the registered user, or fail with `NotRegistered`.
    ///
    /// A corrupted record is returned as-is: the caller cannot start.
    pub fn require_user(&self) -> Result<UserRecord> {
        self.credentials
            .load()?
            .ok_or(SecureFilesError::NotRegistered)
    }

    /// Ask for the password until it verifies or the attempt limit is hit.
    ///
    /// With `SECUREFILES_PASSWORD` set there is exactly one attempt.
    /// The gate is returned so `login` can offer a reset.
    pub fn login(&self, user: &UserRecord) -> (Option<Zeroizing<String>>, LoginGate) {
        let mut gate = LoginGate::new(self.settings.max_failed_attempts);

        if let Some(pw) = password_from_env(PASSWORD_ENV) {
            let granted = gate.attempt(user, &pw) == LoginOutcome::Granted;
            return (granted.then_some(pw), gate);
        }

        while !gate.reset_offered() {
            let pw = match prompt_password("Enter vault password") {
                Ok(pw) => pw,
                Err(e) => {
                    output::error(&e.to_string());
                    break;
                }
            };

            match gate.attempt(user, &pw) {
                LoginOutcome::Granted => return (Some(pw), gate),
                LoginOutcome::Denied { failed_attempts } => {
                    output::warning(&format!(
                        "Incorrect password ({failed_attempts}/{}).",
                        self.settings.max_failed_attempts
                    ));
                }
            }
        }

        (None, gate)
    }

    /// Load the user and verify the password; used by every vault command.
    pub fn authenticate(&self) -> Result<(UserRecord, Zeroizing<String>)> {
        let user = self.require_user()?;
        match self.login(&user) {
            (Some(pw), _) => Ok((user, pw)),
            (None, _) => {
                output::tip("Forgot it? Run `securefiles reset-password`.");
                Err(SecureFilesError::AuthenticationFailed)
            }
        }
    }
}

/// Read a non-empty password from an environment variable.
fn password_from_env(var: &str) -> Option<Zeroizing<String>> {
    match std::env::var(var) {
        Ok(pw) if !pw.is_empty() => Some(Zeroizing::new(pw)),
        _ => None,
    }
}

/// Prompt for an existing password.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password(prompt: &str) -> Result<Zeroizing<String>> {
    let pw = dialoguer::Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| SecureFilesError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new password with confirmation.
///
/// Respects `env_var` for scripted/CI usage.  The password must be
/// non-empty.
pub fn prompt_new_password(env_var: &str) -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env(env_var) {
        return Ok(pw);
    }

    let password = dialoguer::Password::new()
        .with_prompt("Choose vault password")
        .with_confirmation(
            "Confirm vault password",
            "Passwords do not match, try again",
        )
        .interact()
        .map_err(|e| SecureFilesError::CommandFailed(format!("password prompt: {e}")))?;

    Ok(Zeroizing::new(password))
}

/// Use `value` if given, otherwise prompt for it (with an optional default).
pub fn value_or_prompt(value: Option<&str>, prompt: &str, default: Option<&str>) -> Result<String> {
    if let Some(v) = value {
        return Ok(v.to_string());
    }

    let mut input = dialoguer::Input::<String>::new().with_prompt(prompt);
    if let Some(d) = default {
        input = input.default(d.to_string());
    }
    input
        .interact_text()
        .map_err(|e| SecureFilesError::CommandFailed(format!("input prompt: {e}")))
}

/// Ask a yes/no question.  A prompt that cannot be shown is an error,
/// never a silent "no".
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| SecureFilesError::CommandFailed(format!("confirm prompt: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "securefiles",
            "list",
            "--vault-dir",
            "/tmp/v",
            "--user-file",
            "/tmp/u.dat",
        ]);
        assert_eq!(cli.vault_dir.as_deref(), Some("/tmp/v"));
        assert_eq!(cli.user_file.as_deref(), Some("/tmp/u.dat"));
        assert!(matches!(cli.command, Commands::List { json: false }));
    }

    #[test]
    fn encrypt_requires_files() {
        assert!(Cli::try_parse_from(["securefiles", "encrypt"]).is_err());
    }

    #[test]
    fn fetch_port_is_optional() {
        let cli = Cli::parse_from(["securefiles", "fetch", "10.0.0.2", "out.txt"]);
        match cli.command {
            Commands::Fetch { address, port, .. } => {
                assert_eq!(address, "10.0.0.2");
                assert_eq!(port, None);
            }
            _ => panic!("expected fetch"),
        }
    }
}
