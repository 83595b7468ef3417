//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod checkout;
pub mod membership;

pub use checkout::{
    ApplyPromoCodeCommand, ApplyPromoCodeHandler, ApplyPromoCodeResult, PrepareCheckoutHandler,
    PrepareCheckoutQuery, PrepareCheckoutResult, SubmitPaymentCommand, SubmitPaymentHandler,
    SubmitPaymentResult,
};
pub use membership::{
    EvaluateTierProgressCommand, EvaluateTierProgressHandler, EvaluateTierProgressResult,
};
