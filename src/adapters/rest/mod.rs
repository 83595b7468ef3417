//! REST adapters for the ElectriGo backend services.
//!
//! - `HttpAccountGateway` - account service (`/v1/account/user/{id}`)
//! - `HttpBookingGateway` - booking service (`/v1/bookings/...`)
//! - `HttpPromotionGateway` - payment service (`/v1/promotions/apply`)
//! - `HttpPaymentGateway` - payment service (`/v1/payments/make`)
//!
//! Missing resources (404) become `None` or an invalid promo lookup. Transport
//! failures map to `Timeout` or `ServiceUnavailable`, other non-success
//! statuses and undecodable bodies to `UnexpectedResponse`.

mod account_gateway;
mod booking_gateway;
mod client;
mod dto;
mod payment_gateway;
mod promotion_gateway;
#[cfg(test)]
mod test_server;

pub use account_gateway::HttpAccountGateway;
pub use booking_gateway::HttpBookingGateway;
pub use client::{build_http_client, ServiceClient};
pub use payment_gateway::HttpPaymentGateway;
pub use promotion_gateway::HttpPromotionGateway;

use crate::config::ServicesConfig;
use crate::domain::foundation::DomainError;

/// The REST gateways, sharing one connection pool.
#[derive(Debug, Clone)]
pub struct RestGateways {
    pub accounts: HttpAccountGateway,
    pub bookings: HttpBookingGateway,
    pub promotions: HttpPromotionGateway,
    pub payments: HttpPaymentGateway,
}

impl RestGateways {
    /// Builds all gateways from the services configuration.
    pub fn from_config(config: &ServicesConfig) -> Result<Self, DomainError> {
        let http = build_http_client(config.request_timeout())?;
        Ok(Self {
            accounts: HttpAccountGateway::new(ServiceClient::with_client(
                "account",
                config.account_base_url.clone(),
                http.clone(),
            )),
            bookings: HttpBookingGateway::new(ServiceClient::with_client(
                "booking",
                config.booking_base_url.clone(),
                http.clone(),
            )),
            promotions: HttpPromotionGateway::new(ServiceClient::with_client(
                "payment",
                config.payment_base_url.clone(),
                http.clone(),
            )),
            payments: HttpPaymentGateway::new(ServiceClient::with_client(
                "payment",
                config.payment_base_url.clone(),
                http,
            )),
        })
    }
}
