//! Payment service port.
//!
//! Submits the amounts computed at checkout. The service issues the invoice
//! for the reservation and records the payment against it.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::foundation::{DomainError, ReservationId, UserId};
use crate::domain::pricing::PaymentMethod;

/// Port for the ElectriGo payment service.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Submits a payment for a priced reservation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the service refuses the payment or cannot be
    /// reached.
    async fn submit(&self, request: &PaymentRequest) -> Result<PaymentReceipt, DomainError>;
}

/// Amounts submitted for one reservation, each rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub payment_method: PaymentMethod,
    /// Amount charged, after both discounts.
    pub total_cost: Decimal,
    pub membership_discount: Decimal,
    pub promo_discount: Decimal,
}

/// Acknowledgement from the payment service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub message: String,
}
