//! Percentage value object (0-100 scale).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A decimal value between 0 and 100 inclusive.
///
/// Promotions are stored as decimals (e.g. `12.5`), so unlike a whole-number
/// percentage this keeps fractional precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percentage(Decimal);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(Decimal::ONE_HUNDRED);

    /// Creates a Percentage from a whole number, clamping to the valid range.
    pub fn whole(value: u8) -> Self {
        Self(Decimal::from(value.min(100)))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: Decimal) -> Result<Self, ValidationError> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(ValidationError::out_of_range("percentage", 0, 100, value));
        }
        Ok(Self(value))
    }

    /// Returns the value on the 0-100 scale.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `amount * self / 100`.
    ///
    /// # Panics
    ///
    /// Panics if `amount * self` exceeds `Decimal::MAX`. Pricing bounds its
    /// amounts before calling this.
    pub fn of(&self, amount: Decimal) -> Decimal {
        amount * self.0 / Decimal::ONE_HUNDRED
    }

    /// Returns true for 0%.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<Decimal> for Percentage {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentage> for Decimal {
    fn from(value: Percentage) -> Self {
        value.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}
