//! Player configuration: optional TOML file, overridden by command-line flags.

use crate::{Cli, ViewKind};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_core::StrategyKind;
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// ```toml
/// strategy = "blocking"
/// view = "coordinates"
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Computer strategy at start-up.
    strategy: StrategyKind,

    /// Board view at start-up.
    view: ViewKind,

    /// Seed for the computer's random choices; OS entropy when absent.
    seed: Option<u64>,
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(strategy = %config.strategy, view = %config.view, "Config loaded");
        Ok(config)
    }

    /// Builds the effective configuration: file values first, then flags.
    #[instrument(skip(cli))]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli.strategy, cli.view, cli.seed))
    }

    /// Replaces each field for which a value is given.
    pub fn with_overrides(
        self,
        strategy: Option<StrategyKind>,
        view: Option<ViewKind>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            strategy: strategy.unwrap_or(self.strategy),
            view: view.unwrap_or(self.view),
            seed: seed.or(self.seed),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
