//! Account module — the single local user.
//!
//! This module provides:
//! - `UserRecord` and its `a:b:c:d` text format (`record`)
//! - `CredentialStore` for loading and saving the record (`store`)
//! - Sign-up, login, password reset and profile update (`flow`)

pub mod flow;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use flow::{
    reset_password, sign_up, update_profile, LoginGate, LoginOutcome, ProfileUpdate,
    DEFAULT_MAX_FAILED_ATTEMPTS,
};
pub use record::UserRecord;
pub use store::CredentialStore;
