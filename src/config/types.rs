//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Environment, Location, Options, DEFAULT_STATE_PATH};
use crate::error::RevsyncResult;

use super::loader::{self, ConfigWarning};

/// Default configuration file name, looked up in the source root
pub const CONFIG_FILE_NAME: &str = ".revsync.toml";

/// Source repository configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source type token; auto-detected when absent
    #[serde(rename = "type", default)]
    pub source_type: Option<String>,

    #[serde(default)]
    pub options: Options,
}

/// One `[[modifiers]]` rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierRule {
    /// Regular expression matched against the action path
    pub pattern: String,

    /// Replacement template producing the destination path
    #[serde(default)]
    pub rename: Option<String>,

    /// Shell command content is piped through
    #[serde(default)]
    pub filter: Option<String>,

    /// Drop matching paths entirely
    #[serde(default)]
    pub ignore: bool,

    /// Precedence override for emitted actions
    #[serde(default)]
    pub order: Option<u8>,
}

impl ModifierRule {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            rename: None,
            filter: None,
            ignore: false,
            order: None,
        }
    }
}

/// One `[locations.NAME]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub connection: String,

    /// Keep the revision marker on this machine
    #[serde(default)]
    pub local: bool,

    #[serde(default = "default_state")]
    pub state: String,

    #[serde(default)]
    pub append_files: Vec<String>,

    #[serde(default)]
    pub remove_files: Vec<String>,

    #[serde(default)]
    pub options: Options,
}

fn default_state() -> String {
    DEFAULT_STATE_PATH.to_string()
}

impl LocationConfig {
    pub fn to_location(&self, name: &str) -> Location {
        Location::new(name, self.connection.as_str())
            .with_options(self.options.clone())
            .with_local(self.local)
            .with_state(self.state.as_str())
            .with_append_files(self.append_files.clone())
            .with_remove_files(self.remove_files.clone())
    }
}

/// Contents of `.revsync.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub modifiers: Vec<ModifierRule>,

    #[serde(default)]
    pub locations: BTreeMap<String, LocationConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RevsyncResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> RevsyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Configured locations
    pub fn environment(&self) -> Environment {
        self.locations
            .iter()
            .map(|(name, location)| location.to_location(name))
            .collect()
    }
}
