//! Backend service endpoints

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::telemetry::Environment;

/// Base URLs of the ElectriGo REST services
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesConfig {
    /// Account service (users, membership tier)
    #[serde(default = "default_account_base_url")]
    pub account_base_url: String,

    /// Vehicle and booking service
    #[serde(default = "default_booking_base_url")]
    pub booking_base_url: String,

    /// Payment and promotion service
    #[serde(default = "default_payment_base_url")]
    pub payment_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl ServicesConfig {
    /// Per-request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate service configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }

        for (name, url) in self.urls() {
            let is_https = url.starts_with("https://");
            if !is_https && !url.starts_with("http://") {
                return Err(ValidationError::InvalidServiceUrl(name));
            }
            if *environment == Environment::Production && !is_https {
                return Err(ValidationError::ServiceUrlMustBeHttps(name));
            }
        }
        Ok(())
    }

    fn urls(&self) -> [(&'static str, &str); 3] {
        [
            ("account", self.account_base_url.as_str()),
            ("booking", self.booking_base_url.as_str()),
            ("payment", self.payment_base_url.as_str()),
        ]
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            account_base_url: default_account_base_url(),
            booking_base_url: default_booking_base_url(),
            payment_base_url: default_payment_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_account_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_booking_base_url() -> String {
    "http://localhost:8081".to_string()
}

fn default_payment_base_url() -> String {
    "http://localhost:8082".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
