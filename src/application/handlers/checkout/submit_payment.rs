//! SubmitPaymentHandler - Command handler for paying a priced reservation.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::foundation::{ReservationId, UserId};
use crate::domain::pricing::{round_cents, CheckoutError, CostSummary, PaymentMethod};
use crate::ports::{PaymentGateway, PaymentReceipt, PaymentRequest};

/// Command to pay for a reservation at the price shown at checkout.
#[derive(Debug, Clone)]
pub struct SubmitPaymentCommand {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    /// Raw value of the payment method selector.
    pub payment_method: String,
    /// Summary returned by checkout preparation or promo application.
    pub summary: CostSummary,
}

/// Result of an accepted payment.
#[derive(Debug, Clone)]
pub struct SubmitPaymentResult {
    pub receipt: PaymentReceipt,
    pub amount_charged: Decimal,
}

impl SubmitPaymentResult {
    /// Confirmation shown to the customer.
    pub fn confirmation(&self) -> &'static str {
        "Payment successful! Your booking is confirmed."
    }
}

/// Handler for payment submission.
///
/// Sends the summary's total and both discount amounts, rounded to cents,
/// to the payment service.
pub struct SubmitPaymentHandler {
    payments: Arc<dyn PaymentGateway>,
}

impl SubmitPaymentHandler {
    pub fn new(payments: Arc<dyn PaymentGateway>) -> Self {
        Self { payments }
    }

    #[tracing::instrument(
        skip(self, cmd),
        fields(reservation_id = %cmd.reservation_id, user_id = %cmd.user_id)
    )]
    pub async fn handle(
        &self,
        cmd: SubmitPaymentCommand,
    ) -> Result<SubmitPaymentResult, CheckoutError> {
        // 1. A method must be selected
        let payment_method = PaymentMethod::try_new(&cmd.payment_method)
            .map_err(|_| CheckoutError::MissingPaymentMethod)?;

        // 2. Round what the customer was shown
        let pricing = &cmd.summary.pricing;
        let request = PaymentRequest {
            reservation_id: cmd.reservation_id,
            user_id: cmd.user_id,
            payment_method,
            total_cost: cmd.summary.amount_due(),
            membership_discount: round_cents(pricing.membership_discount),
            promo_discount: round_cents(pricing.promo_discount_amount),
        };

        // 3. Submit
        let receipt = self.payments.submit(&request).await.map_err(|e| {
            tracing::error!(error = %e, "Error processing payment");
            CheckoutError::payment_failed(cmd.reservation_id, e)
        })?;

        tracing::info!(
            payment_method = %request.payment_method,
            total_cost = %request.total_cost,
            "Payment submitted"
        );

        Ok(SubmitPaymentResult {
            receipt,
            amount_charged: request.total_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, Percentage};
    use crate::domain::pricing::{compute_pricing, PricingInput};
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockPayments {
        fail: bool,
        submitted: Mutex<Vec<PaymentRequest>>,
    }

    impl MockPayments {
        fn accepting() -> Self {
            Self {
                fail: false,
                submitted: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::accepting()
            }
        }
    }

    #[async_trait]
    impl PaymentGateway for MockPayments {
        async fn submit(&self, request: &PaymentRequest) -> Result<PaymentReceipt, DomainError> {
            if self.fail {
                return Err(DomainError::new(
                    ErrorCode::ServiceUnavailable,
                    "payment service returned 500 Internal Server Error: Error creating invoice",
                ));
            }
            self.submitted.lock().unwrap().push(request.clone());
            Ok(PaymentReceipt {
                message: "Payment processed successfully.".to_string(),
            })
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    /// Premium member, 33.33 base cost, 15% promo.
    fn summary() -> CostSummary {
        let input = PricingInput::try_new(
            Decimal::new(3333, 2),
            Percentage::whole(10),
            Some(Percentage::whole(15)),
        )
        .unwrap();
        CostSummary {
            vehicle_name: "Nissan Leaf".to_string(),
            hourly_rate: Decimal::new(1111, 2),
            membership_level: "Premium".to_string(),
            duration_hours: 3,
            pricing: compute_pricing(&input),
        }
    }

    fn command(method: &str) -> SubmitPaymentCommand {
        SubmitPaymentCommand {
            reservation_id: ReservationId::new(21).unwrap(),
            user_id: UserId::new(4).unwrap(),
            payment_method: method.to_string(),
            summary: summary(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn submits_amounts_rounded_to_cents() {
        let payments = Arc::new(MockPayments::accepting());
        let handler = SubmitPaymentHandler::new(payments.clone());

        let result = handler.handle(command("PayNow")).await.unwrap();

        // 33.33 - 3.333 = 29.997; promo 15% = 4.49955; total 25.49745
        let submitted = payments.submitted.lock().unwrap().clone();
        assert_eq!(submitted.len(), 1);
        let request = &submitted[0];
        assert_eq!(request.reservation_id, ReservationId::new(21).unwrap());
        assert_eq!(request.user_id, UserId::new(4).unwrap());
        assert_eq!(request.payment_method.as_str(), "PayNow");
        assert_eq!(request.membership_discount, Decimal::new(333, 2));
        assert_eq!(request.promo_discount, Decimal::new(450, 2));
        assert_eq!(request.total_cost, Decimal::new(2550, 2));
        assert_eq!(result.amount_charged, Decimal::new(2550, 2));
        assert_eq!(result.receipt.message, "Payment processed successfully.");
        assert_eq!(result.confirmation(), "Payment successful! Your booking is confirmed.");
    }

    #[tokio::test]
    async fn missing_method_is_rejected_without_submission() {
        let payments = Arc::new(MockPayments::accepting());
        let handler = SubmitPaymentHandler::new(payments.clone());

        let err = handler.handle(command("  ")).await.unwrap_err();
        assert_eq!(err, CheckoutError::MissingPaymentMethod);
        assert_eq!(err.user_message(), "Please select a payment method.");
        assert!(payments.submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn service_failure_is_reported_as_payment_failure() {
        let handler = SubmitPaymentHandler::new(Arc::new(MockPayments::failing()));

        let err = handler.handle(command("BankTransfer")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
        assert!(matches!(err, CheckoutError::PaymentFailed { .. }));
        assert_eq!(
            err.user_message(),
            "Failed to process payment. Please try again later."
        );
    }
}
