//! Configuration management for flightboard.
//!
//! Configuration loading and validation using figment, supporting a TOML
//! config file, environment variables, and defaults. The registry itself has
//! nothing to configure; the configuration covers the `fboard` driver.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "flightboard";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FLIGHTBOARD_`)
/// 2. TOML config file at `~/.config/flightboard/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Roster configuration.
    pub roster: RosterConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Roster-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Default roster file used when `--roster` is not given.
    pub path: Option<PathBuf>,
}

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format: "table" or "json".
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "table".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("FLIGHTBOARD_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.output.format.parse::<OutputFormat>().is_err() {
            return Err(Error::config_validation(format!(
                "unknown output format '{}' (expected 'table' or 'json')",
                self.output.format
            )));
        }

        if let Some(path) = &self.roster.path {
            if path.as_os_str().is_empty() {
                return Err(Error::config_validation("roster path must not be empty"));
            }
        }

        Ok(())
    }

    /// The configured roster path, if any.
    #[must_use]
    pub fn roster_path(&self) -> Option<PathBuf> {
        self.roster.path.clone()
    }

    /// The configured output format.
    ///
    /// Falls back to the default when the configured string is unknown;
    /// [`validate`](Self::validate) rejects that case at load time.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output.format.parse().unwrap_or_default()
    }
}
