//! Checkout pricing.
//!
//! Discounts stack in a fixed order: the membership discount comes off the
//! base cost first, then the promo percentage applies to what remains.
//!
//! ```text
//! membership_discount   = base_cost * membership% / 100
//! cost_after_membership = base_cost - membership_discount
//! promo_discount_amount = cost_after_membership * promo% / 100
//! total_cost            = cost_after_membership - promo_discount_amount
//! ```
//!
//! All arithmetic is exact; rounding to cents happens only for display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, ValidationError};
use crate::domain::membership::TierLabel;

/// Largest base cost accepted for pricing, in dollars.
///
/// Keeps every intermediate product well inside `Decimal`'s range.
pub const MAX_BASE_COST: i64 = 1_000_000_000_000;

/// Validated inputs to a pricing computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingInput {
    base_cost: Decimal,
    membership_discount: Percentage,
    promo_discount: Percentage,
}

impl PricingInput {
    /// Creates pricing input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if the base cost is negative or
    /// above [`MAX_BASE_COST`].
    pub fn try_new(
        base_cost: Decimal,
        membership_discount: Percentage,
        promo_discount: Option<Percentage>,
    ) -> Result<Self, ValidationError> {
        if base_cost < Decimal::ZERO || base_cost > Decimal::from(MAX_BASE_COST) {
            return Err(ValidationError::out_of_range(
                "base_cost",
                0,
                MAX_BASE_COST,
                base_cost,
            ));
        }
        Ok(Self {
            base_cost,
            membership_discount,
            promo_discount: promo_discount.unwrap_or(Percentage::ZERO),
        })
    }

    /// Creates pricing input using the discount for a stored tier label.
    pub fn for_tier(
        base_cost: Decimal,
        tier: &TierLabel,
        promo_discount: Option<Percentage>,
    ) -> Result<Self, ValidationError> {
        Self::try_new(base_cost, tier.discount(), promo_discount)
    }

    pub fn base_cost(&self) -> Decimal {
        self.base_cost
    }

    pub fn membership_discount(&self) -> Percentage {
        self.membership_discount
    }

    pub fn promo_discount(&self) -> Percentage {
        self.promo_discount
    }
}

/// Outcome of a pricing computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    pub base_cost: Decimal,
    pub membership_discount_percentage: Percentage,
    pub membership_discount: Decimal,
    pub cost_after_membership: Decimal,
    pub promo_discount_percentage: Percentage,
    pub promo_discount_amount: Decimal,
    pub total_cost: Decimal,
}

impl PricingResult {
    /// Returns a copy with every amount rounded to cents.
    ///
    /// Midpoints round away from zero.
    pub fn rounded_to_cents(&self) -> PricingResult {
        PricingResult {
            base_cost: round_cents(self.base_cost),
            membership_discount: round_cents(self.membership_discount),
            cost_after_membership: round_cents(self.cost_after_membership),
            promo_discount_amount: round_cents(self.promo_discount_amount),
            total_cost: round_cents(self.total_cost),
            ..*self
        }
    }

    /// Returns true if any discount was applied.
    pub fn has_discount(&self) -> bool {
        !self.membership_discount.is_zero() || !self.promo_discount_amount.is_zero()
    }
}

/// Rounds a monetary amount to two decimal places, midpoint away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes discounts and total for validated input.
///
/// Pure: identical input always yields identical output. The total is not
/// clamped; with validated percentages it cannot go below zero.
pub fn compute_pricing(input: &PricingInput) -> PricingResult {
    let base_cost = input.base_cost;
    let membership_discount = input.membership_discount.of(base_cost);
    let cost_after_membership = base_cost - membership_discount;
    let promo_discount_amount = input.promo_discount.of(cost_after_membership);
    let total_cost = cost_after_membership - promo_discount_amount;

    PricingResult {
        base_cost,
        membership_discount_percentage: input.membership_discount,
        membership_discount,
        cost_after_membership,
        promo_discount_percentage: input.promo_discount,
        promo_discount_amount,
        total_cost,
    }
}
