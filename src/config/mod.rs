//! Configuration module for revsync
//!
//! One TOML file (`.revsync.toml` in the source root unless overridden on
//! the command line) describes the source, the modifier rules and the
//! deployment locations.

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, LocationConfig, ModifierRule, SourceConfig, CONFIG_FILE_NAME};
