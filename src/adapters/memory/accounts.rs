//! In-memory account store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{read, write};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::membership::{MembershipTier, TierLabel};
use crate::ports::{AccountGateway, AccountRecord};

/// `AccountGateway` over a map of accounts.
///
/// # Example
///
/// ```ignore
/// let accounts = InMemoryAccounts::new();
/// accounts.insert(AccountRecord { user_id, email, membership_tier: TierLabel::Missing });
///
/// // ... run a handler ...
/// assert_eq!(accounts.tier_updates(), vec![(user_id, MembershipTier::Premium)]);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryAccounts {
    accounts: RwLock<HashMap<UserId, AccountRecord>>,
    updates: RwLock<Vec<(UserId, MembershipTier)>>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an account.
    pub fn insert(&self, account: AccountRecord) {
        write(&self.accounts).insert(account.user_id, account);
    }

    /// Returns a stored account.
    pub fn get(&self, user_id: &UserId) -> Option<AccountRecord> {
        read(&self.accounts).get(user_id).cloned()
    }

    /// Tier updates in the order they were stored.
    pub fn tier_updates(&self) -> Vec<(UserId, MembershipTier)> {
        read(&self.updates).clone()
    }
}

#[async_trait]
impl AccountGateway for InMemoryAccounts {
    async fn get_account(&self, user_id: &UserId) -> Result<Option<AccountRecord>, DomainError> {
        Ok(self.get(user_id))
    }

    async fn update_membership_tier(
        &self,
        user_id: &UserId,
        tier: MembershipTier,
    ) -> Result<(), DomainError> {
        let mut accounts = write(&self.accounts);
        let account = accounts.get_mut(user_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::AccountNotFound,
                format!("No account found for user: {}", user_id),
            )
        })?;
        account.membership_tier = TierLabel::Known(tier);
        write(&self.updates).push((*user_id, tier));
        Ok(())
    }
}
