//! `securefiles login` — check the password; after too many failures,
//! offer a reset through the security question.

use crate::cli::commands::reset_password;
use crate::cli::output;
use crate::cli::{confirm, AppContext, Cli};
use crate::errors::{Result, SecureFilesError};

/// Execute the `login` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    let mut user = ctx.require_user()?;

    let (password, mut gate) = ctx.login(&user);
    if password.is_some() {
        output::success(&format!("Login successful. Welcome back, {}!", user.username()));
        return Ok(());
    }

    if !gate.reset_offered() {
        return Err(SecureFilesError::AuthenticationFailed);
    }

    output::warning(&format!("{} failed attempts.", gate.failed_attempts()));

    let wants_reset = confirm("Reset your password using your security question?", true)?;

    if !wants_reset {
        output::tip("Run `securefiles reset-password` at any time.");
        return Err(SecureFilesError::AuthenticationFailed);
    }

    if reset_password::run(&ctx, &mut user, None)? {
        gate.clear();
        Ok(())
    } else {
        Err(SecureFilesError::AuthenticationFailed)
    }
}
