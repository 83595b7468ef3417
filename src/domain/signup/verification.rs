//! Email verification challenge for account sign-up.
//!
//! A challenge is issued when the user asks for a code and handed back by
//! the caller when the user submits it. Nothing is stored process-wide; the
//! caller owns the challenge for the lifetime of the sign-up attempt.
//!
//! The challenge never leaves the server. It has no serde impls and its
//! `Debug` output omits the code; only [`VerificationChallenge::code`]
//! exposes it, for delivery by email.

use std::fmt;

use rand::Rng;
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Minutes a verification code stays valid.
pub const CODE_TTL_MINUTES: i64 = 5;

/// Digits in a verification code.
pub const CODE_LENGTH: usize = 6;

/// Reasons a submitted code is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("Verification code was issued for a different email address")]
    EmailMismatch,

    #[error("Verification code has expired")]
    Expired,

    #[error("Verification code is incorrect")]
    CodeMismatch,
}

/// A pending email verification.
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationChallenge {
    email: String,
    code: String,
    expires_at: Timestamp,
}

impl fmt::Debug for VerificationChallenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationChallenge")
            .field("email", &self.email)
            .field("code", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl VerificationChallenge {
    /// Issues a challenge with a random code.
    pub fn issue(email: &str, now: Timestamp) -> Result<Self, ValidationError> {
        Self::issue_with_rng(email, now, &mut rand::thread_rng())
    }

    /// Issues a challenge drawing the code from `rng`.
    pub fn issue_with_rng<R: Rng>(
        email: &str,
        now: Timestamp,
        rng: &mut R,
    ) -> Result<Self, ValidationError> {
        let email = normalize_email(email)?;
        let code = format!("{:06}", rng.gen_range(0..1_000_000u32));
        Ok(Self {
            email,
            code,
            expires_at: now.plus_minutes(CODE_TTL_MINUTES),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The code to deliver to the user by email.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    /// Checks a submitted code against this challenge.
    ///
    /// The code comparison runs in constant time.
    pub fn verify(&self, email: &str, code: &str, now: Timestamp) -> Result<(), VerificationError> {
        match normalize_email(email) {
            Ok(submitted) if submitted == self.email => {}
            _ => return Err(VerificationError::EmailMismatch),
        }
        if now.is_after(&self.expires_at) {
            return Err(VerificationError::Expired);
        }
        let matches: bool = self.code.as_bytes().ct_eq(code.trim().as_bytes()).into();
        if !matches {
            return Err(VerificationError::CodeMismatch);
        }
        Ok(())
    }
}

fn normalize_email(email: &str) -> Result<String, ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => {
            Ok(trimmed.to_ascii_lowercase())
        }
        _ => Err(ValidationError::invalid_format("email", "expected name@domain")),
    }
}
