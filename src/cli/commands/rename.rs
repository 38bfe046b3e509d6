//! `securefiles rename` — rename an encrypted file inside the vault.

use crate::cli::output;
use crate::cli::{AppContext, Cli};
use crate::errors::{Result, SecureFilesError};
use crate::vault::artifact::{artifact_name_for, is_artifact_name};
use crate::vault::rename_artifact;

/// Execute the `rename` command.
///
/// The new name keeps the `.enc` suffix so the file stays in the listing.
pub fn execute(cli: &Cli, name: &str, new_name: &str) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    let _ = ctx.authenticate()?;
    let artifact = ctx.vault.find_artifact(name)?;

    let target = if is_artifact_name(new_name) {
        new_name.to_string()
    } else {
        artifact_name_for(new_name)
    };

    if ctx.vault.dir().join(&target).exists() {
        return Err(SecureFilesError::CommandFailed(format!(
            "{target} already exists in the vault"
        )));
    }

    if !rename_artifact(&artifact.path, &target) {
        return Err(SecureFilesError::CommandFailed("Failed to rename file".into()));
    }

    output::success(&format!("Renamed {} → {target}", artifact.file_name));
    Ok(())
}
