//! Membership tier definitions.
//!
//! Represents the loyalty levels an ElectriGo customer can hold.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::{Percentage, ValidationError};

/// Membership loyalty tier.
///
/// Determines the discount applied at checkout. Ordered `Basic < Premium < VIP`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MembershipTier {
    /// Entry tier. No discount.
    #[default]
    Basic,

    /// Reached after 5 qualifying bookings. 10% off.
    Premium,

    /// Reached after 15 qualifying bookings. 20% off. Terminal tier.
    #[serde(rename = "VIP")]
    Vip,
}

impl MembershipTier {
    /// All tiers in ascending order.
    pub const ALL: [MembershipTier; 3] = [
        MembershipTier::Basic,
        MembershipTier::Premium,
        MembershipTier::Vip,
    ];

    /// Returns the display name for this tier.
    ///
    /// This is also the label the account service stores.
    pub fn display_name(&self) -> &'static str {
        match self {
            MembershipTier::Basic => "Basic",
            MembershipTier::Premium => "Premium",
            MembershipTier::Vip => "VIP",
        }
    }

    /// Returns the checkout discount for this tier.
    pub fn discount(&self) -> Percentage {
        match self {
            MembershipTier::Basic => Percentage::ZERO,
            MembershipTier::Premium => Percentage::whole(10),
            MembershipTier::Vip => Percentage::whole(20),
        }
    }

    /// Returns the next tier up, or `None` at the top.
    pub fn next(&self) -> Option<MembershipTier> {
        match self {
            MembershipTier::Basic => Some(MembershipTier::Premium),
            MembershipTier::Premium => Some(MembershipTier::Vip),
            MembershipTier::Vip => None,
        }
    }

    /// Returns true for the highest tier.
    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

impl std::fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MembershipTier {
    type Err = ValidationError;

    /// Strict parse of a stored tier label. Case-sensitive, as stored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Basic" => Ok(MembershipTier::Basic),
            "Premium" => Ok(MembershipTier::Premium),
            "VIP" => Ok(MembershipTier::Vip),
            other => Err(ValidationError::invalid_format(
                "membership_tier",
                format!("unknown tier '{}'", other),
            )),
        }
    }
}
