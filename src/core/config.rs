//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides
//! earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$VESHOP_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/veshop/config.toml`
//! 3. `~/.veshop/config.toml`
//!
//! Missing config files are not an error; defaults are used. A file that
//! exists but cannot be parsed is an error.
//!
//! # Example
//!
//! ```no_run
//! use veshop::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! let state_dir = config.state_dir().unwrap();
//! println!("state dir: {}", state_dir.display());
//! ```

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("home directory not found")]
    NoHomeDir,
}

/// User configuration.
///
/// All fields are optional; accessor methods apply defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the persisted store records.
    pub state_dir: Option<PathBuf>,

    /// Default to minimal output.
    pub quiet: Option<bool>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or
    /// parsed. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                return Self::read_file(&path);
            }
        }
        Ok(Self::default())
    }

    /// Resolve the config file location without reading it.
    ///
    /// Follows the search order documented at module level. Returns
    /// `None` only when no home directory can be determined and neither
    /// environment override is set.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("VESHOP_CONFIG") {
            return Some(PathBuf::from(path));
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("veshop/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir().map(|home| home.join(".veshop/config.toml"))
    }

    fn read_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            message: e.to_string(),
        })
    }

    /// The state directory, falling back to `~/.veshop/state`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if no directory is configured and
    /// the home directory cannot be determined.
    pub fn state_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.state_dir {
            return Ok(dir.clone());
        }
        dirs::home_dir()
            .map(|home| home.join(".veshop").join("state"))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Whether quiet output is configured.
    pub fn quiet(&self) -> bool {
        self.quiet.unwrap_or(false)
    }
}
