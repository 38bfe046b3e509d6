//! `securefiles profile` — update the registered user.

use crate::account::{self, ProfileUpdate};
use crate::cli::output;
use crate::cli::{prompt_new_password, value_or_prompt, AppContext, Cli, NEW_PASSWORD_ENV};
use crate::errors::Result;

/// Execute the `profile` command.
pub fn execute(
    cli: &Cli,
    username: Option<&str>,
    question: Option<&str>,
    answer: Option<&str>,
    change_password: bool,
) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    let (user, _password) = ctx.authenticate()?;

    // Unspecified fields are prompted for, pre-filled with the current value.
    let username = value_or_prompt(username, "Username", Some(user.username()))?;
    let question = value_or_prompt(question, "Security question", Some(user.security_question()))?;
    let answer = value_or_prompt(answer, "Security answer", Some(user.security_answer()))?;

    let new_password = if change_password {
        Some(prompt_new_password(NEW_PASSWORD_ENV)?)
    } else {
        None
    };

    let update = ProfileUpdate {
        username: &username,
        new_password: new_password.as_deref().map(String::as_str),
        security_question: &question,
        security_answer: &answer,
    };
    let updated = account::update_profile(&ctx.credentials, &user, &update)?;

    output::success(&format!("Profile updated for '{}'", updated.username()));
    if change_password {
        output::warning(
            "Files encrypted under the old password still need the old password to decrypt.",
        );
    }

    Ok(())
}
