//! ApplyPromoCodeHandler - Command handler for promo code submission.

use std::sync::Arc;

use super::context::load_checkout_context;
use crate::domain::foundation::{Percentage, ReservationId, UserId};
use crate::domain::membership::{PromoCode, EMPTY_PROMO_CODE_MESSAGE};
use crate::domain::pricing::{compute_pricing, CheckoutError, CostSummary, PricingInput};
use crate::ports::{AccountGateway, BookingGateway, PromoLookup, PromotionGateway};

/// Command to apply a promo code to a reservation.
#[derive(Debug, Clone)]
pub struct ApplyPromoCodeCommand {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    /// Raw text from the promo field.
    pub promo_code: String,
}

/// Result of a successfully applied promo code.
#[derive(Debug, Clone)]
pub struct ApplyPromoCodeResult {
    pub promo_code: PromoCode,
    pub discount_percentage: Percentage,
    pub summary: CostSummary,
}

impl ApplyPromoCodeResult {
    /// Confirmation shown to the customer.
    pub fn confirmation(&self) -> String {
        format!(
            "Promo code applied successfully! You saved {} on your booking.",
            self.discount_percentage
        )
    }
}

/// Handler for promo code submission.
///
/// The promo percentage applies to the cost left after the membership
/// discount.
pub struct ApplyPromoCodeHandler {
    bookings: Arc<dyn BookingGateway>,
    accounts: Arc<dyn AccountGateway>,
    promotions: Arc<dyn PromotionGateway>,
}

impl ApplyPromoCodeHandler {
    pub fn new(
        bookings: Arc<dyn BookingGateway>,
        accounts: Arc<dyn AccountGateway>,
        promotions: Arc<dyn PromotionGateway>,
    ) -> Self {
        Self {
            bookings,
            accounts,
            promotions,
        }
    }

    #[tracing::instrument(
        skip(self, cmd),
        fields(reservation_id = %cmd.reservation_id, user_id = %cmd.user_id)
    )]
    pub async fn handle(
        &self,
        cmd: ApplyPromoCodeCommand,
    ) -> Result<ApplyPromoCodeResult, CheckoutError> {
        // 1. Reject a blank code before any service call
        let promo_code = PromoCode::try_new(&cmd.promo_code)
            .map_err(|_| CheckoutError::invalid_promo_code("", EMPTY_PROMO_CODE_MESSAGE))?;

        // 2. Load reservation and account
        let ctx = load_checkout_context(
            self.bookings.as_ref(),
            self.accounts.as_ref(),
            &cmd.reservation_id,
            &cmd.user_id,
        )
        .await?;

        // 3. Look up the promotion
        let lookup = self
            .promotions
            .apply(&promo_code, &cmd.reservation_id)
            .await
            .map_err(|e| {
                tracing::error!(promo_code = %promo_code, error = %e, "Error applying promo code");
                CheckoutError::collaborator("promotion", e)
            })?;

        let discount_percentage = match lookup {
            PromoLookup::Valid {
                discount_percentage,
            } => discount_percentage,
            PromoLookup::Invalid(reason) => {
                tracing::info!(promo_code = %promo_code, reason = ?reason, "Promo code refused");
                return Err(CheckoutError::invalid_promo_code(
                    promo_code.as_str(),
                    reason.user_message(),
                ));
            }
        };

        // 4. Price with membership discount first, promo second
        let tier = &ctx.account.membership_tier;
        let input = PricingInput::for_tier(ctx.booking.base_cost, tier, Some(discount_percentage))?;
        let pricing = compute_pricing(&input);

        tracing::info!(
            promo_code = %promo_code,
            discount = %discount_percentage,
            promo_discount_amount = %pricing.promo_discount_amount,
            total_cost = %pricing.total_cost,
            "Promo code applied"
        );

        Ok(ApplyPromoCodeResult {
            promo_code,
            discount_percentage,
            summary: CostSummary::new(&ctx.booking, tier, pricing),
        })
    }
}
