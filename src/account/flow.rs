//! Account flows driven by the front end: sign-up, login, password reset
//! and profile update.
//!
//! The user record is passed in explicitly; nothing here keeps global
//! state.  The consecutive-failure counter lives in `LoginGate`, which
//! the caller owns for the length of its session.

use subtle::ConstantTimeEq;

use crate::crypto::{hash_password, verify_password};
use crate::errors::{Result, SecureFilesError};

use super::record::UserRecord;
use super::store::CredentialStore;

/// Consecutive failures before a password reset is offered.
pub const DEFAULT_MAX_FAILED_ATTEMPTS: u32 = 3;

/// Register the single user and persist the record.
///
/// All four inputs must be non-empty and free of `:`.
pub fn sign_up(
    store: &CredentialStore,
    username: &str,
    password: &str,
    security_question: &str,
    security_answer: &str,
) -> Result<UserRecord> {
    require_non_empty("username", username)?;
    require_non_empty("password", password)?;
    require_non_empty("security question", security_question)?;
    require_non_empty("security answer", security_answer)?;

    let user = UserRecord::new(
        username,
        hash_password(password),
        security_question,
        security_answer,
    )?;
    store.save(&user)?;

    tracing::info!(username, "user registered");
    Ok(user)
}

/// Outcome of one login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    /// Wrong password; `failed_attempts` counts consecutive failures.
    Denied { failed_attempts: u32 },
}

/// Tracks consecutive failed logins for one caller session.
#[derive(Debug, Clone)]
pub struct LoginGate {
    failed_attempts: u32,
    max_failed_attempts: u32,
}

impl Default for LoginGate {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FAILED_ATTEMPTS)
    }
}

impl LoginGate {
    pub fn new(max_failed_attempts: u32) -> Self {
        Self {
            failed_attempts: 0,
            max_failed_attempts,
        }
    }

    /// Check `password` against the user's stored hash.
    ///
    /// Success resets the failure counter; failure increments it.
    pub fn attempt(&mut self, user: &UserRecord, password: &str) -> LoginOutcome {
        if verify_password(password, user.password_hash()) {
            self.failed_attempts = 0;
            LoginOutcome::Granted
        } else {
            self.failed_attempts = self.failed_attempts.saturating_add(1);
            tracing::debug!(failed_attempts = self.failed_attempts, "login denied");
            LoginOutcome::Denied {
                failed_attempts: self.failed_attempts,
            }
        }
    }

    /// Number of consecutive failures so far.
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// True once the failure threshold has been reached.
    pub fn reset_offered(&self) -> bool {
        self.failed_attempts >= self.max_failed_attempts
    }

    /// Forget previous failures (after a successful reset).
    pub fn clear(&mut self) {
        self.failed_attempts = 0;
    }
}

/// Replace the password if `answer` matches the stored security answer.
///
/// Returns `Ok(false)` without writing anything when the answer is wrong
/// or `new_password` is empty.  On success `user` is updated in place and
/// saved.
pub fn reset_password(
    store: &CredentialStore,
    user: &mut UserRecord,
    answer: &str,
    new_password: &str,
) -> Result<bool> {
    let answer_matches: bool = answer
        .as_bytes()
        .ct_eq(user.security_answer().as_bytes())
        .into();

    if !answer_matches || new_password.is_empty() {
        tracing::debug!("password reset refused");
        return Ok(false);
    }

    let updated = user.with_password_hash(hash_password(new_password));
    store.save(&updated)?;
    *user = updated;

    tracing::info!("password reset");
    Ok(true)
}

/// New values for a profile update.
///
/// `new_password: None` (or an empty string) keeps the current password.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate<'a> {
    pub username: &'a str,
    pub new_password: Option<&'a str>,
    pub security_question: &'a str,
    pub security_answer: &'a str,
}

/// Replace the whole record with the values in `update` and save it.
pub fn update_profile(
    store: &CredentialStore,
    user: &UserRecord,
    update: &ProfileUpdate<'_>,
) -> Result<UserRecord> {
    require_non_empty("username", update.username)?;
    require_non_empty("security question", update.security_question)?;
    require_non_empty("security answer", update.security_answer)?;

    let password_hash = match update.new_password {
        Some(pw) if !pw.is_empty() => hash_password(pw),
        _ => *user.password_hash(),
    };

    let updated = UserRecord::new(
        update.username,
        password_hash,
        update.security_question,
        update.security_answer,
    )?;
    store.save(&updated)?;

    tracing::info!(username = update.username, "profile updated");
    Ok(updated)
}

fn require_non_empty(label: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SecureFilesError::InvalidField(format!(
            "{label}: must not be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, CredentialStore) {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join("user.dat"));
        (dir, store)
    }

    #[test]
    fn sign_up_rejects_empty_inputs() {
        let (_dir, store) = store();
        assert!(sign_up(&store, "", "pw", "q", "a").is_err());
        assert!(sign_up(&store, "u", "", "q", "a").is_err());
        assert!(sign_up(&store, "u", "pw", "", "a").is_err());
        assert!(sign_up(&store, "u", "pw", "q", "").is_err());
        assert!(!store.exists(), "nothing should be written");
    }

    #[test]
    fn gate_counts_consecutive_failures() {
        let (_dir, store) = store();
        let user = sign_up(&store, "u", "pw", "q", "a").unwrap();
        let mut gate = LoginGate::new(2);

        assert_eq!(
            gate.attempt(&user, "x"),
            LoginOutcome::Denied { failed_attempts: 1 }
        );
        assert!(!gate.reset_offered());
        gate.attempt(&user, "y");
        assert!(gate.reset_offered());

        assert_eq!(gate.attempt(&user, "pw"), LoginOutcome::Granted);
        assert_eq!(gate.failed_attempts(), 0);
        assert!(!gate.reset_offered());
    }

    #[test]
    fn reset_requires_non_empty_password() {
        let (_dir, store) = store();
        let mut user = sign_up(&store, "u", "pw", "q", "a").unwrap();
        assert!(!reset_password(&store, &mut user, "a", "").unwrap());
        assert!(verify_password("pw", user.password_hash()));
    }

    #[test]
    fn profile_update_keeps_password_when_blank() {
        let (_dir, store) = store();
        let user = sign_up(&store, "u", "pw", "q", "a").unwrap();

        let update = ProfileUpdate {
            username: "u2",
            new_password: Some(""),
            security_question: "q2",
            security_answer: "a2",
        };
        let updated = update_profile(&store, &user, &update).unwrap();
        assert_eq!(updated.username(), "u2");
        assert_eq!(updated.password_hash(), user.password_hash());
        assert_eq!(store.load().unwrap(), Some(updated));
    }

    #[test]
    fn profile_update_rejects_separator() {
        let (_dir, store) = store();
        let user = sign_up(&store, "u", "pw", "q", "a").unwrap();

        let update = ProfileUpdate {
            username: "u",
            new_password: None,
            security_question: "when: ever?",
            security_answer: "a",
        };
        assert!(matches!(
            update_profile(&store, &user, &update),
            Err(SecureFilesError::InvalidField(_))
        ));
        assert_eq!(store.load().unwrap(), Some(user));
    }

    #[test]
    fn sign_up_rejects_trailing_newline_in_answer() {
        let (_dir, store) = store();
        assert!(matches!(
            sign_up(&store, "alice", "pw", "q", "Rex\n"),
            Err(SecureFilesError::InvalidField(_))
        ));
        assert!(!store.exists(), "nothing should be written");
    }
}
