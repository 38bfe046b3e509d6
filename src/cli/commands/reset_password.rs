//! `securefiles reset-password` — replace the password after answering
//! the security question.

use crate::account::{self, UserRecord};
use crate::cli::output;
use crate::cli::{prompt_new_password, value_or_prompt, AppContext, Cli, NEW_PASSWORD_ENV};
use crate::errors::{Result, SecureFilesError};

/// Execute the `reset-password` command.
pub fn execute(cli: &Cli, answer: Option<&str>) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    let mut user = ctx.require_user()?;

    if run(&ctx, &mut user, answer)? {
        Ok(())
    } else {
        Err(SecureFilesError::CommandFailed("password was not reset".into()))
    }
}

/// Ask the security question and apply the reset.
///
/// Shared with `login`, which offers this after repeated failures.
pub(crate) fn run(ctx: &AppContext, user: &mut UserRecord, answer: Option<&str>) -> Result<bool> {
    let answer = value_or_prompt(answer, user.security_question(), None)?;
    let new_password = prompt_new_password(NEW_PASSWORD_ENV)?;

    if account::reset_password(&ctx.credentials, user, &answer, &new_password)? {
        output::success("Password reset successful!");
        output::warning(
            "Files encrypted under the old password still need the old password to decrypt.",
        );
        Ok(true)
    } else {
        output::error("Incorrect security answer or empty password.");
        Ok(false)
    }
}
