//! Application configuration, stored as JSON next to the database.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{export::ExportConfig, persist::StoreConfig};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "stocklist.json";
const DEFAULT_DB_PATH: &str = "inventory.db";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid config JSON.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database file, created on first run.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    /// Also enforce unique names with a store-level index.
    #[serde(default)]
    pub unique_names: bool,
    /// Export worksheet layout.
    #[serde(default)]
    pub export: ExportConfig,
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            unique_names: false,
            export: ExportConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads config from `path`, or returns defaults if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Store options derived from this config.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            unique_names: self.unique_names,
        }
    }
}
