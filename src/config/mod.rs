//! Configuration loaded from `.securefiles.toml`.

pub mod settings;

pub use settings::Settings;
