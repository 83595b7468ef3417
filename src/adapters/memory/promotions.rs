//! In-memory promotion catalogue.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{read, write};
use crate::domain::foundation::{DomainError, Percentage, ReservationId, Timestamp};
use crate::domain::membership::PromoCode;
use crate::ports::{PromoInvalidReason, PromoLookup, PromotionGateway};

/// A promotion and the inclusive date range it is valid for.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Promotion {
    discount: Percentage,
    valid_from: NaiveDate,
    valid_until: NaiveDate,
}

/// `PromotionGateway` over a code-to-promotion map.
///
/// Codes are live when today's date lies within their validity window.
#[derive(Debug, Default)]
pub struct InMemoryPromotions {
    promotions: RwLock<HashMap<PromoCode, Promotion>>,
}

impl InMemoryPromotions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a code valid on every date.
    pub fn insert(&self, code: PromoCode, discount: Percentage) {
        self.insert_window(code, discount, NaiveDate::MIN, NaiveDate::MAX);
    }

    /// Adds a code valid from `valid_from` to `valid_until`, both inclusive.
    pub fn insert_window(
        &self,
        code: PromoCode,
        discount: Percentage,
        valid_from: NaiveDate,
        valid_until: NaiveDate,
    ) {
        write(&self.promotions).insert(
            code,
            Promotion {
                discount,
                valid_from,
                valid_until,
            },
        );
    }

    fn lookup_on(&self, code: &PromoCode, today: NaiveDate) -> PromoLookup {
        match read(&self.promotions).get(code) {
            Some(promo) if promo.valid_from <= today && today <= promo.valid_until => {
                PromoLookup::valid(promo.discount)
            }
            _ => PromoLookup::Invalid(PromoInvalidReason::NotFoundOrExpired),
        }
    }
}

#[async_trait]
impl PromotionGateway for InMemoryPromotions {
    async fn apply(
        &self,
        code: &PromoCode,
        _reservation_id: &ReservationId,
    ) -> Result<PromoLookup, DomainError> {
        let today = Timestamp::now().as_datetime().date_naive();
        Ok(self.lookup_on(code, today))
    }
}
