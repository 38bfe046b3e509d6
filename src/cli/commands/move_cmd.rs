//! `securefiles move` — move an encrypted file into another directory.

use std::path::Path;

use crate::cli::output;
use crate::cli::{AppContext, Cli};
use crate::errors::{Result, SecureFilesError};
use crate::vault::move_artifact;

/// Execute the `move` command.
pub fn execute(cli: &Cli, name: &str, dir: &Path) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    let _ = ctx.authenticate()?;
    let artifact = ctx.vault.find_artifact(name)?;

    if !move_artifact(&artifact.path, dir) {
        return Err(SecureFilesError::CommandFailed("Failed to move file".into()));
    }

    output::success(&format!(
        "Moved {} to {}",
        artifact.file_name,
        dir.display()
    ));
    output::tip("Files outside the vault directory no longer appear in `securefiles list`.");
    Ok(())
}
