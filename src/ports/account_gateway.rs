//! Account service port.
//!
//! Reads the member's account (for the stored tier label) and persists tier
//! promotions.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::membership::{MembershipTier, TierLabel};

/// Account fields the pricing engine needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRecord {
    pub user_id: UserId,
    pub email: String,
    pub membership_tier: TierLabel,
}

/// Port for the ElectriGo account service.
#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// Fetches an account.
    ///
    /// Returns `None` if the user does not exist.
    async fn get_account(&self, user_id: &UserId) -> Result<Option<AccountRecord>, DomainError>;

    /// Persists a new membership tier for the user.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the user does not exist
    /// - collaborator codes on transport failure
    async fn update_membership_tier(
        &self,
        user_id: &UserId,
        tier: MembershipTier,
    ) -> Result<(), DomainError>;
}
