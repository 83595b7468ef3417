//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `membership` - Loyalty tiers, discounts, and tier progression
//! - `pricing` - Checkout discount stacking and cost summaries
//! - `booking` - Reservation records and qualifying-booking counts
//! - `signup` - Email verification challenges

pub mod booking;
pub mod foundation;
pub mod membership;
pub mod pricing;
pub mod signup;
