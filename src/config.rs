//! Configuration loading and management
//!
//! Handles parsing of `taskline.toml` configuration files. A missing file
//! yields the defaults; a file that exists but does not parse is a fatal
//! startup error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::storage::DEFAULT_TASKS_FILE;

/// Name of the config file, resolved against the working directory.
pub const CONFIG_FILE: &str = "taskline.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Persistence configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
        }
    }
}

/// Persistence-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Tasks file path
    #[serde(default = "default_tasks_file")]
    pub file: PathBuf,
}

fn default_tasks_file() -> PathBuf {
    PathBuf::from(DEFAULT_TASKS_FILE)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: default_tasks_file(),
        }
    }
}

/// Load configuration from `taskline.toml` in the given directory.
pub fn load(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    toml::from_str(&contents).map_err(|err| Error::InvalidConfig(err.to_string()))
}
