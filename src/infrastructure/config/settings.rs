//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct. Every section is optional; values
//! given on the command line override the file, which overrides the
//! built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use blogstat::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("blogstat.toml")?;
//!     config.logging.adjusted(1, false).init();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Locations of the two store files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoresConfig {
    pub authors: PathBuf,
    pub logs: PathBuf,
}

impl Default for StoresConfig {
    fn default() -> Self {
        Self {
            authors: PathBuf::from("authors.db"),
            logs: PathBuf::from("logs.db"),
        }
    }
}

/// Output locations of the CSV reports.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportsConfig {
    pub comments: PathBuf,
    pub general: PathBuf,
    /// Daily summary; not written unless set.
    pub daily: Option<PathBuf>,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            comments: PathBuf::from("comments.csv"),
            general: PathBuf::from("general.csv"),
            daily: None,
        }
    }
}

/// Random generation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed RNG seed for reproducible data.
    pub seed: Option<u64>,
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logging: LoggingConfig,
    pub stores: StoresConfig,
    pub reports: ReportsConfig,
    pub generator: GeneratorConfig,
}

impl Config {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()?;

        let paths = [
            ("stores.authors", &self.stores.authors),
            ("stores.logs", &self.stores.logs),
            ("reports.comments", &self.reports.comments),
            ("reports.general", &self.reports.general),
        ];
        for (field, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "path must not be empty".to_string(),
                }
                .into());
            }
        }
        if self.stores.authors == self.stores.logs {
            return Err(ConfigError::InvalidValue {
                field: "stores.logs",
                reason: "must differ from stores.authors".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
