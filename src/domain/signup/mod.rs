//! Sign-up domain module.
//!
//! Email verification for new accounts.

mod verification;

pub use verification::{
    VerificationChallenge, VerificationError, CODE_LENGTH, CODE_TTL_MINUTES,
};
