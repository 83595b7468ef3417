//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each handler runs one user action as a sequential chain of collaborator
//! calls; any failure aborts the chain.

pub mod handlers;

pub use handlers::{
    // Checkout handlers
    ApplyPromoCodeCommand, ApplyPromoCodeHandler, ApplyPromoCodeResult,
    PrepareCheckoutHandler, PrepareCheckoutQuery, PrepareCheckoutResult,
    SubmitPaymentCommand, SubmitPaymentHandler, SubmitPaymentResult,
    // Membership handlers
    EvaluateTierProgressCommand, EvaluateTierProgressHandler, EvaluateTierProgressResult,
};
