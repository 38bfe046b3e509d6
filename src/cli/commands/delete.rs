//! `securefiles delete` — remove an encrypted file from the vault.

use crate::cli::output;
use crate::cli::{confirm, AppContext, Cli};
use crate::errors::{Result, SecureFilesError};
use crate::vault::delete_artifact;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, name: &str, force: bool) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    let _ = ctx.authenticate()?;
    let artifact = ctx.vault.find_artifact(name)?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = confirm(
            &format!("Are you sure you want to delete {}?", artifact.file_name),
            false,
        )?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    if !delete_artifact(&artifact.path) {
        return Err(SecureFilesError::CommandFailed(format!(
            "failed to delete {}",
            artifact.file_name
        )));
    }

    output::success(&format!("Deleted {}", artifact.file_name));
    Ok(())
}
