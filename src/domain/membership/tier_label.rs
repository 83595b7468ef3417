//! Lenient reading of the tier label stored on an account.
//!
//! The account service stores the tier as free text. Checkout must never fail
//! because of it: a missing label means `Basic`, and a label that names no tier
//! earns no discount.

use serde::Serialize;

use super::MembershipTier;
use crate::domain::foundation::Percentage;

/// A membership tier label as received from the account service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TierLabel {
    /// The label names a known tier.
    Known(MembershipTier),

    /// The account carries no label. Treated as `Basic`.
    Missing,

    /// The label names no known tier. Discount falls back to 0%.
    Unknown(String),
}

impl TierLabel {
    /// Classifies a raw label.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => TierLabel::Missing,
            Some(label) => match label.parse::<MembershipTier>() {
                Ok(tier) => TierLabel::Known(tier),
                Err(_) => TierLabel::Unknown(label.to_string()),
            },
        }
    }

    /// Returns the discount for this label.
    ///
    /// Unknown labels fail open to 0%.
    pub fn discount(&self) -> Percentage {
        match self {
            TierLabel::Known(tier) => tier.discount(),
            TierLabel::Missing => MembershipTier::Basic.discount(),
            TierLabel::Unknown(label) => {
                tracing::warn!(label = %label, "Unknown membership tier label, applying no discount");
                Percentage::ZERO
            }
        }
    }

    /// Returns the tier to use for progression.
    ///
    /// Missing and unknown labels start from `Basic`.
    pub fn effective_tier(&self) -> MembershipTier {
        match self {
            TierLabel::Known(tier) => *tier,
            TierLabel::Missing | TierLabel::Unknown(_) => MembershipTier::Basic,
        }
    }

    /// Returns the label to show the user.
    pub fn display_label(&self) -> String {
        match self {
            TierLabel::Known(tier) => tier.display_name().to_string(),
            TierLabel::Missing => MembershipTier::Basic.display_name().to_string(),
            TierLabel::Unknown(label) => label.clone(),
        }
    }
}

impl From<MembershipTier> for TierLabel {
    fn from(tier: MembershipTier) -> Self {
        TierLabel::Known(tier)
    }
}
