//! `securefiles encrypt` — encrypt one or more files into the vault.

use std::path::PathBuf;

use crate::cli::output;
use crate::cli::{AppContext, Cli};
use crate::errors::{Result, SecureFilesError};

/// Execute the `encrypt` command.
pub fn execute(cli: &Cli, files: &[PathBuf]) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    let (_user, password) = ctx.authenticate()?;

    let results = ctx.vault.encrypt_many(&password, files);

    let mut failed = 0usize;
    for (source, result) in files.iter().zip(results) {
        match result {
            Ok(artifact) => output::success(&format!(
                "Encrypted {} → {}",
                source.display(),
                artifact.display()
            )),
            Err(e) => {
                failed += 1;
                output::error(&format!("{}: {e}", source.display()));
            }
        }
    }

    if failed > 0 {
        return Err(SecureFilesError::CommandFailed(format!(
            "{failed} of {} file(s) could not be encrypted",
            files.len()
        )));
    }

    output::tip("The originals were left in place; delete them if you no longer need them.");
    Ok(())
}
