//! Membership domain module.
//!
//! Handles loyalty tiers, their checkout discounts, and promotion between
//! tiers as a member accumulates bookings.
//!
//! # Module Structure
//!
//! - `tier` - MembershipTier loyalty levels and discounts
//! - `tier_label` - Fail-open reading of stored tier labels
//! - `tier_progress` - Booking-count driven progression
//! - `promo_code` - PromoCode value object
//! - `errors` - MembershipError

mod errors;
mod promo_code;
mod tier;
mod tier_label;
mod tier_progress;

pub use errors::MembershipError;
pub use promo_code::{PromoCode, EMPTY_PROMO_CODE_MESSAGE};
pub use tier::MembershipTier;
pub use tier_label::TierLabel;
pub use tier_progress::{
    threshold_for, tier_progress, TierProgress, TierPromotion, HIGHEST_TIER_MESSAGE,
};
