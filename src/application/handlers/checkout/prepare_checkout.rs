//! PrepareCheckoutHandler - Query handler pricing a reservation on page load.

use std::sync::Arc;

use super::context::load_checkout_context;
use crate::domain::foundation::{ReservationId, UserId};
use crate::domain::pricing::{compute_pricing, CheckoutError, CostSummary, PricingInput};
use crate::ports::{AccountGateway, BookingGateway};

/// Query to price a reservation before any promo code is entered.
#[derive(Debug, Clone)]
pub struct PrepareCheckoutQuery {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
}

/// Result of a successful checkout preparation.
pub type PrepareCheckoutResult = CostSummary;

/// Handler that prices a reservation with the member's tier discount.
pub struct PrepareCheckoutHandler {
    bookings: Arc<dyn BookingGateway>,
    accounts: Arc<dyn AccountGateway>,
}

impl PrepareCheckoutHandler {
    pub fn new(bookings: Arc<dyn BookingGateway>, accounts: Arc<dyn AccountGateway>) -> Self {
        Self { bookings, accounts }
    }

    #[tracing::instrument(
        skip(self, query),
        fields(reservation_id = %query.reservation_id, user_id = %query.user_id)
    )]
    pub async fn handle(
        &self,
        query: PrepareCheckoutQuery,
    ) -> Result<PrepareCheckoutResult, CheckoutError> {
        let ctx = load_checkout_context(
            self.bookings.as_ref(),
            self.accounts.as_ref(),
            &query.reservation_id,
            &query.user_id,
        )
        .await?;

        let tier = &ctx.account.membership_tier;
        let input = PricingInput::for_tier(ctx.booking.base_cost, tier, None)?;
        let pricing = compute_pricing(&input);

        tracing::debug!(
            base_cost = %pricing.base_cost,
            membership_discount = %pricing.membership_discount,
            total_cost = %pricing.total_cost,
            "Priced checkout"
        );

        Ok(CostSummary::new(&ctx.booking, tier, pricing))
    }
}
