//! Account service adapter.

use async_trait::async_trait;

use super::client::ServiceClient;
use super::dto::{AccountDto, UpdateTierRequest};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::membership::MembershipTier;
use crate::ports::{AccountGateway, AccountRecord};

/// `AccountGateway` backed by the account service REST API.
#[derive(Debug, Clone)]
pub struct HttpAccountGateway {
    client: ServiceClient,
}

impl HttpAccountGateway {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    fn user_url(&self, user_id: &UserId) -> String {
        self.client.url(&format!("/v1/account/user/{}", user_id))
    }
}

#[async_trait]
impl AccountGateway for HttpAccountGateway {
    async fn get_account(&self, user_id: &UserId) -> Result<Option<AccountRecord>, DomainError> {
        let response = self
            .client
            .http()
            .get(self.user_url(user_id))
            .send()
            .await
            .map_err(|e| self.client.send_error(e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(self.client.status_error(response).await);
        }

        let dto: AccountDto = self.client.decode(response).await?;
        Ok(Some(dto.into_record(*user_id)))
    }

    async fn update_membership_tier(
        &self,
        user_id: &UserId,
        tier: MembershipTier,
    ) -> Result<(), DomainError> {
        let response = self
            .client
            .http()
            .put(self.user_url(user_id))
            .json(&UpdateTierRequest::from(tier))
            .send()
            .await
            .map_err(|e| self.client.send_error(e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DomainError::new(
                ErrorCode::AccountNotFound,
                format!("No account found for user: {}", user_id),
            ));
        }

        if !response.status().is_success() {
            return Err(self.client.status_error(response).await);
        }

        tracing::debug!(user_id = %user_id, tier = %tier, "Stored membership tier");
        Ok(())
    }
}
