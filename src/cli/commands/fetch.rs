//! `securefiles fetch` — receive one file from a serving peer.

use std::path::Path;

use crate::cli::output;
use crate::config::Settings;
use crate::errors::Result;
use crate::transfer;

/// Execute the `fetch` command.
pub fn execute(address: &str, dest: &Path, port: Option<u16>) -> Result<()> {
    let settings = Settings::load(&std::env::current_dir()?)?;
    let port = port.unwrap_or(settings.transfer_port);

    output::info(&format!("Connecting to {address}:{port}"));

    let received = transfer::fetch(address, port, dest)?;

    output::success(&format!(
        "File received successfully: {} ({received} bytes)",
        dest.display()
    ));
    Ok(())
}
