//! `securefiles signup` — register the vault's single user.

use crate::account;
use crate::cli::output;
use crate::cli::{prompt_new_password, value_or_prompt, AppContext, Cli, PASSWORD_ENV};
use crate::errors::{Result, SecureFilesError};

/// Execute the `signup` command.
pub fn execute(
    cli: &Cli,
    username: Option<&str>,
    question: Option<&str>,
    answer: Option<&str>,
) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;

    // 1. Refuse to replace an existing user (a corrupt record also stops here).
    if ctx.credentials.load()?.is_some() {
        output::tip("Use `securefiles profile` to change the registered user.");
        return Err(SecureFilesError::AlreadyRegistered);
    }

    // 2. Collect the four fields.
    let username = value_or_prompt(username, "Username", None)?;
    let password = prompt_new_password(PASSWORD_ENV)?;
    let question = value_or_prompt(question, "Security question", None)?;
    let answer = value_or_prompt(answer, "Security answer", None)?;

    // 3. Hash and persist.
    let user = account::sign_up(&ctx.credentials, &username, &password, &question, &answer)?;

    // 4. Make sure the vault directory is there for the first `encrypt`.
    ctx.vault.ensure_dir()?;

    output::success(&format!("Registered user '{}'", user.username()));
    output::info(&format!("Vault directory: {}", ctx.vault.dir().display()));
    output::tip("Run `securefiles encrypt <FILE>` to add a file.");

    Ok(())
}
