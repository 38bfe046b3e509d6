//! `securefiles list` — display all encrypted files in a table.

use crate::cli::output;
use crate::cli::{AppContext, Cli};
use crate::errors::{Result, SecureFilesError};

/// Execute the `list` command.
pub fn execute(cli: &Cli, json: bool) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    let _ = ctx.authenticate()?;

    // Directory order is unspecified; sort for display only.
    let mut artifacts = ctx.vault.list_artifacts()?;
    artifacts.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    if json {
        let text = serde_json::to_string_pretty(&artifacts)
            .map_err(|e| SecureFilesError::CommandFailed(format!("JSON output: {e}")))?;
        println!("{text}");
        return Ok(());
    }

    output::info(&format!(
        "{} — {} encrypted file(s)",
        ctx.vault.dir().display(),
        artifacts.len()
    ));

    output::print_artifacts_table(&artifacts);

    Ok(())
}
