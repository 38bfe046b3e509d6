//! The single user record and its flat text format.
//!
//! The record is stored as one line of UTF-8 text:
//!
//! ```text
//! username:password_hash_hex:security_question:security_answer
//! ```
//!
//! The hash is 64 lowercase hex characters.  There is no escaping, so
//! no field may contain `:` or a line terminator; `UserRecord::new`
//! enforces that before a record can ever be written.

use std::fmt;

use crate::crypto::{PasswordHash, HASH_LEN};
use crate::errors::{Result, SecureFilesError};

/// Separator between the four fields.
pub const FIELD_SEPARATOR: char = ':';

/// Number of fields in a serialized record.
const FIELD_COUNT: usize = 4;

/// The persisted identity of the vault's single user.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    username: String,
    password_hash: PasswordHash,
    security_question: String,
    security_answer: String,
}

impl UserRecord {
    /// Build a record, rejecting any field the line format cannot hold.
    pub fn new(
        username: &str,
        password_hash: PasswordHash,
        security_question: &str,
        security_answer: &str,
    ) -> Result<Self> {
        check_field("username", username)?;
        check_field("security question", security_question)?;
        check_field("security answer", security_answer)?;

        Ok(Self {
            username: username.to_string(),
            password_hash,
            security_question: security_question.to_string(),
            security_answer: security_answer.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn security_question(&self) -> &str {
        &self.security_question
    }

    pub fn security_answer(&self) -> &str {
        &self.security_answer
    }

    /// Return a copy with the password hash replaced.
    pub fn with_password_hash(&self, password_hash: PasswordHash) -> Self {
        Self {
            password_hash,
            ..self.clone()
        }
    }

    /// Serialize to the `a:b:c:d` line (no trailing newline).
    pub fn to_line(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.username,
            hex::encode(self.password_hash),
            self.security_question,
            self.security_answer,
            sep = FIELD_SEPARATOR
        )
    }

    /// Parse the `a:b:c:d` line.
    ///
    /// A single trailing line terminator is tolerated.  Anything else
    /// that does not fit the format is a `CorruptState` error.
    pub fn parse(text: &str) -> Result<Self> {
        let line = text
            .strip_suffix("\r\n")
            .or_else(|| text.strip_suffix('\n'))
            .unwrap_or(text);

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != FIELD_COUNT {
            return Err(SecureFilesError::CorruptState(format!(
                "expected {FIELD_COUNT} fields separated by '{FIELD_SEPARATOR}', found {}",
                fields.len()
            )));
        }

        let hash_bytes = hex::decode(fields[1])
            .map_err(|e| SecureFilesError::CorruptState(format!("password hash: {e}")))?;
        let password_hash: PasswordHash = hash_bytes.try_into().map_err(|bytes: Vec<u8>| {
            SecureFilesError::CorruptState(format!(
                "password hash must be {HASH_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;

        Ok(Self {
            username: fields[0].to_string(),
            password_hash,
            security_question: fields[2].to_string(),
            security_answer: fields[3].to_string(),
        })
    }
}

// Keep the answer and hash out of debug output.
impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("username", &self.username)
            .field("security_question", &self.security_question)
            .finish_non_exhaustive()
    }
}

/// Reject values the flat format cannot represent.
pub fn check_field(label: &str, value: &str) -> Result<()> {
    if value.contains(FIELD_SEPARATOR) {
        return Err(SecureFilesError::InvalidField(format!(
            "{label}: must not contain '{FIELD_SEPARATOR}'"
        )));
    }
    // `parse` drops a trailing terminator, so one here would not survive a reload.
    if value.contains(['\n', '\r']) {
        return Err(SecureFilesError::InvalidField(format!(
            "{label}: must not contain a line break"
        )));
    }
    Ok(())
}
