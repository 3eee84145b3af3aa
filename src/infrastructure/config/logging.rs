//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl LoggingConfig {
    /// Shift the configured level by command-line verbosity.
    ///
    /// Each `-v` raises the level one step; `quiet` drops it to `warn`.
    /// Levels that are not a plain name (full filter directives) are kept.
    #[must_use]
    pub fn adjusted(&self, verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            "warn".to_string()
        } else {
            match LEVELS.iter().position(|level| *level == self.level) {
                Some(index) => {
                    let raised = (index + usize::from(verbose)).min(LEVELS.len() - 1);
                    LEVELS[raised].to_string()
                }
                None => self.level.clone(),
            }
        };

        Self {
            level,
            format: self.format.clone(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !matches!(self.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected \"pretty\" or \"json\", got \"{}\"", self.format),
            }
            .into());
        }
        if self.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Output goes to
    /// stderr.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}
