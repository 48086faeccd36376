use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

const APP_DIR: &str = "finance-tracker";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
    pub notifications_enabled: bool,
    pub dark_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".into(),
            log_file: None,
            log_filter: "finance_tracker=info".into(),
            notifications_enabled: true,
            dark_mode: false,
        }
    }
}

impl Config {
    /// `<config dir>/finance-tracker/config.json`, when the platform has a
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Reads `path`. A file that does not exist yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Loads from `path` if given, otherwise from [`Config::default_path`].
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) => Self::load(&path),
                None => Ok(Config::default()),
            },
        }
    }
}
