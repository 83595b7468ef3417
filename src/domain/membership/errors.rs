//! Membership-specific error types.
//!
//! Errors raised while evaluating or persisting tier progression.

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Membership-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// No account exists for this user.
    AccountNotFound(UserId),

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// A collaborator call failed. Terminal for the current action.
    Collaborator { code: ErrorCode, message: String },
}

impl MembershipError {
    pub fn account_not_found(user_id: UserId) -> Self {
        MembershipError::AccountNotFound(user_id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MembershipError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn collaborator(code: ErrorCode, message: impl Into<String>) -> Self {
        MembershipError::Collaborator {
            code,
            message: message.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::AccountNotFound(_) => ErrorCode::AccountNotFound,
            MembershipError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MembershipError::Collaborator { code, .. } => *code,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            MembershipError::AccountNotFound(user_id) => {
                format!("No account found for user: {}", user_id)
            }
            MembershipError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MembershipError::Collaborator { message, .. } => {
                format!("Failed to load membership details: {}", message)
            }
        }
    }
}

impl std::fmt::Display for MembershipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MembershipError {}

impl From<DomainError> for MembershipError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => {
                let field = err.details.get("field").cloned().unwrap_or_default();
                MembershipError::validation(field, err.message)
            }
            code => MembershipError::collaborator(code, err.message),
        }
    }
}
