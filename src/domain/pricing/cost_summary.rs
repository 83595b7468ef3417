//! Cost summary shown on the checkout page.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::engine::{round_cents, PricingResult};
use crate::domain::booking::BookingRecord;
use crate::domain::membership::TierLabel;

/// Everything the checkout page displays about a priced booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostSummary {
    pub vehicle_name: String,
    pub hourly_rate: Decimal,
    pub membership_level: String,
    pub duration_hours: u32,
    pub pricing: PricingResult,
}

impl CostSummary {
    /// Builds a summary from a booking, the member's tier label and a result.
    pub fn new(booking: &BookingRecord, tier: &TierLabel, pricing: PricingResult) -> Self {
        Self {
            vehicle_name: booking.vehicle_name.clone(),
            hourly_rate: booking.hourly_rate,
            membership_level: tier.display_label(),
            duration_hours: booking.duration_hours(),
            pricing,
        }
    }

    /// Amount to submit for payment, rounded to cents.
    pub fn amount_due(&self) -> Decimal {
        round_cents(self.pricing.total_cost)
    }
}

/// Formats an amount as dollars with two decimals.
pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", round_cents(amount))
}

impl fmt::Display for CostSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.pricing;
        writeln!(f, "Vehicle: {}", self.vehicle_name)?;
        writeln!(f, "Hourly Rate: {}", format_money(self.hourly_rate))?;
        writeln!(f, "Membership Level: {}", self.membership_level)?;
        writeln!(f, "Rental Duration: {} hours", self.duration_hours)?;
        writeln!(f, "Base Cost: {}", format_money(p.base_cost))?;
        writeln!(
            f,
            "Membership Discount ({}): -{}",
            p.membership_discount_percentage,
            format_money(p.membership_discount)
        )?;
        writeln!(f, "Promotional Discount: -{}", format_money(p.promo_discount_amount))?;
        write!(f, "Total Cost: {}", format_money(p.total_cost))
    }
}
