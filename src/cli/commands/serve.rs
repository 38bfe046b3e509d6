//! `securefiles serve` — send one file to the first peer that connects.
//!
//! Blocks until the transfer is done; Ctrl-C is the only way out while
//! waiting for a peer.

use std::path::Path;

use crate::cli::output;
use crate::config::Settings;
use crate::errors::Result;
use crate::transfer;

/// Execute the `serve` command.
pub fn execute(file: &Path, port: Option<u16>) -> Result<()> {
    let settings = Settings::load(&std::env::current_dir()?)?;
    let port = port.unwrap_or(settings.transfer_port);

    output::info(&format!(
        "Serving {} on port {port} — waiting for one peer (Ctrl-C to abort)",
        file.display()
    ));
    output::warning("The transfer is not encrypted.");

    let sent = transfer::serve(port, file)?;

    output::success(&format!("File sent successfully ({sent} bytes)"));
    Ok(())
}
