use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, DEFAULT_ENDPOINT, DEFAULT_LOG_FILE};

/// Read-only settings, loaded once at startup
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog URL the single fetch goes to
    pub endpoint: String,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: String::from(DEFAULT_ENDPOINT),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// `~/.country-challenge/config.yaml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join("config.yaml")
    }

    /// Load from `path`. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Load from the default location, falling back to defaults on any error
    pub fn load() -> (Self, Option<anyhow::Error>) {
        match Self::load_from(&Self::default_path()) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }
}
