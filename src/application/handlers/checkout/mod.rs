//! Checkout handlers.
//!
//! ## Queries
//! - Pricing a reservation on page load
//!
//! ## Commands
//! - Applying a promo code
//! - Submitting payment

mod apply_promo_code;
mod context;
mod prepare_checkout;
mod submit_payment;

pub use apply_promo_code::{ApplyPromoCodeCommand, ApplyPromoCodeHandler, ApplyPromoCodeResult};
pub use prepare_checkout::{PrepareCheckoutHandler, PrepareCheckoutQuery, PrepareCheckoutResult};
pub use submit_payment::{SubmitPaymentCommand, SubmitPaymentHandler, SubmitPaymentResult};
