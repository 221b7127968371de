//! Command handlers for the revsync binary

mod deploy;
mod locations;
mod status;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use revsync::infrastructure::RuleDefinition;
use revsync::{Config, Environment, CONFIG_FILE_NAME};
use tracing::warn;

pub use deploy::cmd_deploy;
pub use locations::cmd_locations;
pub use status::cmd_status;

/// Loaded configuration plus the directory deployments run from
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    pub environment: Environment,
}

impl Project {
    /// Load the configuration; the project root is the current directory
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let root = std::env::current_dir().context("cannot determine current directory")?;
        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.join(CONFIG_FILE_NAME));

        let (config, warnings) = Config::load_with_warnings(&path)?;
        for warning in &warnings {
            warn!("{}", warning);
        }

        let environment = config.environment();
        Ok(Self {
            root,
            config,
            environment,
        })
    }

    pub fn definition(&self) -> Result<RuleDefinition> {
        Ok(RuleDefinition::from_config(&self.config)?)
    }
}
