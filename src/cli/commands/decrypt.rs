//! `securefiles decrypt` — decrypt artifacts next to their encrypted copies.

use crate::cli::output;
use crate::cli::{AppContext, Cli};
use crate::errors::{Result, SecureFilesError};
use crate::vault::{decrypt_many, Artifact};

/// Execute the `decrypt` command.
///
/// With no names, every artifact in the vault is decrypted.
pub fn execute(cli: &Cli, names: &[String]) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    let (_user, password) = ctx.authenticate()?;

    let artifacts: Vec<Artifact> = if names.is_empty() {
        ctx.vault.list_artifacts()?
    } else {
        names
            .iter()
            .map(|n| ctx.vault.find_artifact(n))
            .collect::<Result<_>>()?
    };

    if artifacts.is_empty() {
        output::info("Nothing to decrypt.");
        return Ok(());
    }

    let paths: Vec<_> = artifacts.iter().map(|a| a.path.as_path()).collect();
    let results = decrypt_many(&password, &paths);

    let mut failed = 0usize;
    for (artifact, result) in artifacts.iter().zip(results) {
        match result {
            Some(path) => output::success(&format!("Decrypted {}", path.display())),
            None => {
                failed += 1;
                output::error(&format!(
                    "Could not decrypt {} — wrong password or corrupted file",
                    artifact.file_name
                ));
            }
        }
    }

    if failed > 0 {
        return Err(SecureFilesError::CommandFailed(format!(
            "{failed} of {} file(s) could not be decrypted",
            artifacts.len()
        )));
    }

    Ok(())
}
