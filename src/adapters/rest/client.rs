//! Shared HTTP plumbing for the ElectriGo REST services.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::domain::foundation::{DomainError, ErrorCode};

/// HTTP client bound to one service's base URL.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    service: &'static str,
    base_url: String,
    http: reqwest::Client,
}

impl ServiceClient {
    /// Creates a client with its own connection pool and request timeout.
    pub fn new(
        service: &'static str,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        Ok(Self::with_client(service, base_url, build_http_client(timeout)?))
    }

    /// Creates a client that shares an existing connection pool.
    pub fn with_client(
        service: &'static str,
        base_url: impl Into<String>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            service,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Name used in logs and error messages.
    pub fn service(&self) -> &'static str {
        self.service
    }

    /// Joins `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Maps a transport failure.
    pub(super) fn send_error(&self, err: reqwest::Error) -> DomainError {
        let code = if err.is_timeout() {
            ErrorCode::Timeout
        } else {
            ErrorCode::ServiceUnavailable
        };
        tracing::warn!(service = self.service, error = %err, "Request failed");
        DomainError::new(code, format!("{} service request failed: {}", self.service, err))
            .with_detail("service", self.service)
    }

    /// Maps a non-success response, consuming its body for the message.
    pub(super) async fn status_error(&self, response: reqwest::Response) -> DomainError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        status_to_error(self.service, status, body.trim())
    }

    /// Decodes a JSON body.
    pub(super) async fn decode<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, DomainError> {
        response.json().await.map_err(|e| {
            DomainError::new(
                ErrorCode::UnexpectedResponse,
                format!("Failed to parse {} service response: {}", self.service, e),
            )
            .with_detail("service", self.service)
        })
    }
}

/// Builds the underlying `reqwest` client.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to build HTTP client: {}", e),
            )
        })
}

fn status_to_error(service: &'static str, status: reqwest::StatusCode, body: &str) -> DomainError {
    let code = if status.is_server_error() {
        ErrorCode::ServiceUnavailable
    } else {
        ErrorCode::UnexpectedResponse
    };
    DomainError::new(code, format!("{} service returned {}: {}", service, status, body))
        .with_detail("service", service)
        .with_detail("status", status.as_u16().to_string())
}
