//! Payment method chosen at checkout.

use std::fmt;

use crate::domain::foundation::ValidationError;

/// Message shown when payment is submitted without a method.
pub const MISSING_PAYMENT_METHOD_MESSAGE: &str = "Please select a payment method.";

/// A non-blank payment method name such as `PayNow` or `BankTransfer`.
///
/// Which methods are accepted is up to the payment service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaymentMethod(String);

impl PaymentMethod {
    /// Creates a payment method from the selected option.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if nothing was selected.
    pub fn try_new(method: &str) -> Result<Self, ValidationError> {
        let trimmed = method.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("payment_method"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
