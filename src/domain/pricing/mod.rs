//! Pricing domain module.
//!
//! Pure checkout arithmetic: membership discount, promo discount, and total.
//!
//! # Module Structure
//!
//! - `engine` - PricingInput, PricingResult and `compute_pricing`
//! - `cost_summary` - Display model for the checkout page
//! - `payment_method` - PaymentMethod chosen when paying
//! - `errors` - CheckoutError

mod cost_summary;
mod engine;
mod errors;
mod payment_method;

pub use cost_summary::{format_money, CostSummary};
pub use engine::{compute_pricing, round_cents, PricingInput, PricingResult, MAX_BASE_COST};
pub use errors::CheckoutError;
pub use payment_method::{PaymentMethod, MISSING_PAYMENT_METHOD_MESSAGE};
