//! Configuration loading
//!
//! Reads `songboard/config.toml` from the user's config directory (or an
//! explicit path). A missing file is not an error; a broken one falls back
//! to defaults and reports a warning for the UI to show.

mod types;

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub use types::{
    Config, DEFAULT_BASE_URL, DEFAULT_DEBOUNCE_MS, DEFAULT_MAX_VISIBLE,
    DEFAULT_REQUEST_TIMEOUT_MS, ServerConfig, SuggestionConfig,
};

const CONFIG_DIR_NAME: &str = "songboard";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Outcome of loading the configuration
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when the file existed but could not be used
    pub warning: Option<String>,
}

/// Default config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                return ConfigResult {
                    config: Config::default(),
                    warning: None,
                };
            }
        },
    };

    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config_file(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{}. Using defaults.", e)),
            }
        }
    }
}

/// Read and parse a config file, failing on IO or TOML errors
pub fn read_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })
}
