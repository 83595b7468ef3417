//! Membership handlers.
//!
//! ## Commands
//! - Evaluating tier progression from lifetime bookings

mod evaluate_tier;

pub use evaluate_tier::{
    EvaluateTierProgressCommand, EvaluateTierProgressHandler, EvaluateTierProgressResult,
};
