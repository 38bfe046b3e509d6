//! One module per subcommand; each exposes an `execute` function.

pub mod completions;
pub mod decrypt;
pub mod delete;
pub mod encrypt;
pub mod fetch;
pub mod list;
pub mod login;
pub mod move_cmd;
pub mod profile;
pub mod rename;
pub mod reset_password;
pub mod serve;
pub mod signup;
pub mod version;
