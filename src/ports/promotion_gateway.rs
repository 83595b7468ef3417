//! Promotion service port.
//!
//! Looks up the discount granted by a promo code for a reservation. The
//! service only returns codes whose validity window covers today.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Percentage, ReservationId};
use crate::domain::membership::PromoCode;

/// Port for the ElectriGo promotion service.
#[async_trait]
pub trait PromotionGateway: Send + Sync {
    /// Looks up a promo code for a reservation.
    ///
    /// # Returns
    ///
    /// - `Ok(Valid { .. })` - Code is live with the given discount
    /// - `Ok(Invalid(reason))` - Code was refused
    /// - `Err(DomainError)` - Infrastructure error occurred
    async fn apply(
        &self,
        code: &PromoCode,
        reservation_id: &ReservationId,
    ) -> Result<PromoLookup, DomainError>;
}

/// Result of looking up a promo code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromoLookup {
    /// Code is live.
    Valid { discount_percentage: Percentage },
    /// Code was refused for the specified reason.
    Invalid(PromoInvalidReason),
}

impl PromoLookup {
    pub fn valid(discount_percentage: Percentage) -> Self {
        PromoLookup::Valid { discount_percentage }
    }

    /// Returns true if the code is valid.
    pub fn is_valid(&self) -> bool {
        matches!(self, PromoLookup::Valid { .. })
    }

    /// Converts to a Result, with invalid becoming an error.
    pub fn into_result(self) -> Result<Percentage, PromoInvalidReason> {
        match self {
            PromoLookup::Valid { discount_percentage } => Ok(discount_percentage),
            PromoLookup::Invalid(reason) => Err(reason),
        }
    }
}

/// Reason a promo code was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromoInvalidReason {
    /// Code does not exist or is outside its validity window.
    NotFoundOrExpired,

    /// Service refused the request for another reason.
    Rejected { detail: String },
}

impl PromoInvalidReason {
    /// Get a user-facing message for the invalid reason.
    pub fn user_message(&self) -> String {
        match self {
            PromoInvalidReason::NotFoundOrExpired => "Invalid or expired promo code.".to_string(),
            PromoInvalidReason::Rejected { detail } => {
                format!("Promo code could not be applied: {}", detail)
            }
        }
    }
}

impl std::fmt::Display for PromoInvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}
