//! Tier progression driven by lifetime booking count.
//!
//! | Current | Promote to | Threshold |
//! |---------|------------|-----------|
//! | Basic   | Premium    | >= 5      |
//! | Premium | VIP        | >= 15     |
//! | VIP     | -          | -         |

use serde::Serialize;

use super::MembershipTier;

/// Message reported once the member holds the top tier.
pub const HIGHEST_TIER_MESSAGE: &str = "already at highest tier";

/// Qualifying bookings required to hold `tier`.
pub fn threshold_for(tier: MembershipTier) -> u32 {
    match tier {
        MembershipTier::Basic => 0,
        MembershipTier::Premium => 5,
        MembershipTier::Vip => 15,
    }
}

/// Outcome of evaluating a member's progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierProgress {
    /// Tier the member holds after evaluation.
    pub current_tier: MembershipTier,
    /// Lifetime count of non-cancelled bookings.
    pub booking_count: u32,
    /// Tier the member was promoted to by this evaluation, if any.
    pub promoted_to: Option<MembershipTier>,
    /// Next tier to work towards, `None` at the top.
    pub next_tier: Option<MembershipTier>,
    /// Bookings still needed for `next_tier`. Zero at the top.
    pub bookings_remaining: u32,
    /// Human-readable summary.
    pub message: String,
}

impl TierProgress {
    /// Returns the promotion to persist, if any.
    pub fn promotion(&self) -> Option<TierPromotion> {
        self.promoted_to.map(|new_tier| TierPromotion { new_tier })
    }
}

/// A tier change that must be persisted by the account service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierPromotion {
    pub new_tier: MembershipTier,
}

/// Evaluates progression for `current` given `booking_count`.
///
/// Thresholds are applied until none is met, so a Basic member with 15 or
/// more bookings lands on VIP in one evaluation. Never demotes.
pub fn tier_progress(current: MembershipTier, booking_count: u32) -> TierProgress {
    let mut tier = current;
    while let Some(next) = tier.next() {
        if booking_count < threshold_for(next) {
            break;
        }
        tier = next;
    }

    let promoted_to = (tier != current).then_some(tier);
    let next_tier = tier.next();
    let bookings_remaining = next_tier
        .map(|next| threshold_for(next).saturating_sub(booking_count))
        .unwrap_or(0);

    let message = match (promoted_to, next_tier) {
        (Some(new_tier), _) => format!("promoted to {}", new_tier),
        (None, Some(next)) => format!("{} more booking(s) to reach {}", bookings_remaining, next),
        (None, None) => HIGHEST_TIER_MESSAGE.to_string(),
    };

    TierProgress {
        current_tier: tier,
        booking_count,
        promoted_to,
        next_tier,
        bookings_remaining,
        message,
    }
}
