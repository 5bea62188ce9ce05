//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DECISION_WIZARD` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working
//! local configuration (mock analysis, built-in templates).
//!
//! # Example
//!
//! ```no_run
//! use decision_wizard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod analysis;
mod error;
mod features;
mod presentation;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use features::{LoggingConfig, NotificationsConfig, TemplatesConfig};
pub use presentation::PresentationConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Remote analysis function (endpoint, key, timeout)
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Score colour thresholds for the results table
    #[serde(default)]
    pub presentation: PresentationConfig,

    /// Template catalog source
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// Completion notifications
    #[serde(default)]
    pub notifications: NotificationsConfig,

    /// Log output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_WIZARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_WIZARD__ANALYSIS__TIMEOUT_SECS=60` -> `analysis.timeout_secs = 60`
    /// - `DECISION_WIZARD__PRESENTATION__HIGH_THRESHOLD=9` -> `presentation.high_threshold = 9.0`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_WIZARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.analysis.validate()?;
        self.presentation.validate()?;
        Ok(())
    }

    /// Loads and validates in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }
}
