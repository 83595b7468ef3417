//! Checkout error types.
//!
//! Every variant is terminal for the current user action; the caller shows
//! `user_message()` and waits for the user to try again.

use thiserror::Error;

use super::payment_method::MISSING_PAYMENT_METHOD_MESSAGE;
use crate::domain::foundation::{DomainError, ErrorCode, ReservationId, UserId, ValidationError};

/// Errors raised while pricing a checkout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Reservation {0} not found")]
    BookingNotFound(ReservationId),

    #[error("No account found for user {0}")]
    AccountNotFound(UserId),

    #[error("Promo code '{code}' rejected: {reason}")]
    InvalidPromoCode { code: String, reason: String },

    #[error("No payment method selected")]
    MissingPaymentMethod,

    #[error("Payment for reservation {reservation_id} failed: [{code}] {message}")]
    PaymentFailed {
        reservation_id: ReservationId,
        code: ErrorCode,
        message: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{service} service call failed: [{code}] {message}")]
    Collaborator {
        service: &'static str,
        code: ErrorCode,
        message: String,
    },
}

impl CheckoutError {
    pub fn invalid_promo_code(code: impl Into<String>, reason: impl Into<String>) -> Self {
        CheckoutError::InvalidPromoCode {
            code: code.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a port failure from the named collaborator.
    pub fn collaborator(service: &'static str, err: DomainError) -> Self {
        CheckoutError::Collaborator {
            service,
            code: err.code,
            message: err.message,
        }
    }

    /// Wraps a payment service failure.
    pub fn payment_failed(reservation_id: ReservationId, err: DomainError) -> Self {
        CheckoutError::PaymentFailed {
            reservation_id,
            code: err.code,
            message: err.message,
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CheckoutError::BookingNotFound(_) => ErrorCode::BookingNotFound,
            CheckoutError::AccountNotFound(_) => ErrorCode::AccountNotFound,
            CheckoutError::InvalidPromoCode { .. } => ErrorCode::InvalidPromoCode,
            CheckoutError::MissingPaymentMethod => ErrorCode::ValidationFailed,
            CheckoutError::PaymentFailed { code, .. } => *code,
            CheckoutError::Validation(_) => ErrorCode::ValidationFailed,
            CheckoutError::Collaborator { code, .. } => *code,
        }
    }

    /// Message suitable for showing to the customer.
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::BookingNotFound(_) => {
                "Invalid reservation. Please choose a vehicle again.".to_string()
            }
            CheckoutError::AccountNotFound(_) => {
                "Failed to load membership details. Please try again later.".to_string()
            }
            CheckoutError::InvalidPromoCode { reason, .. } => reason.clone(),
            CheckoutError::MissingPaymentMethod => MISSING_PAYMENT_METHOD_MESSAGE.to_string(),
            CheckoutError::PaymentFailed { .. } => {
                "Failed to process payment. Please try again later.".to_string()
            }
            CheckoutError::Validation(err) => err.to_string(),
            CheckoutError::Collaborator { service, .. } => {
                format!("Failed to load {} details. Please try again later.", service)
            }
        }
    }
}
