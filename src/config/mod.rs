//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ELECTRIGO` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use electrigo::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Account service at {}", config.services.account_base_url);
//! ```

mod error;
mod services;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use services::ServicesConfig;
pub use telemetry::{Environment, TelemetryConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults suitable for local development, so an empty
/// environment yields a working configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Backend service endpoints and request timeout
    #[serde(default)]
    pub services: ServicesConfig,

    /// Logging and environment
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ELECTRIGO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ELECTRIGO__SERVICES__ACCOUNT_BASE_URL=...` -> `services.account_base_url = ...`
    /// - `ELECTRIGO__TELEMETRY__JSON=true` -> `telemetry.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ELECTRIGO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// - URL schemes and timeout bounds
    /// - Log filter syntax
    /// - HTTPS service URLs in production
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.services.validate(&self.telemetry.environment)?;
        self.telemetry.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.telemetry.is_production()
    }
}
