//! Promo code value object.
//!
//! Represents a promotional code entered at checkout. Codes are campaign
//! strings chosen by staff (e.g. `SUMMER24`, `EV-WEEKEND`) and are matched
//! by the promotion service exactly as entered.
//!
//! # Validation Rules
//!
//! - Surrounding whitespace is ignored
//! - Must not be empty

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Message shown when the promo field is submitted blank.
pub const EMPTY_PROMO_CODE_MESSAGE: &str = "Please enter a valid promo code.";

/// A non-blank promotional code.
///
/// Whether the code is live is decided by the promotion service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PromoCode(String);

impl PromoCode {
    /// Creates a new PromoCode from user input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the code is empty after
    /// trimming.
    pub fn try_new(code: &str) -> Result<Self, ValidationError> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("promo_code"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the trimmed code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PromoCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for PromoCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<String> for PromoCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(&value)
    }
}

impl From<PromoCode> for String {
    fn from(code: PromoCode) -> Self {
        code.0
    }
}
