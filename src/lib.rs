pub mod account;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod transfer;
pub mod vault;
