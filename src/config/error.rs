//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid {0} URL format")]
    InvalidServiceUrl(&'static str),

    #[error("{0} URL must use HTTPS in production")]
    ServiceUrlMustBeHttps(&'static str),

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),
}
