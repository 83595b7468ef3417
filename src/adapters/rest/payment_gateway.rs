//! Payment service adapter.

use async_trait::async_trait;

use super::client::ServiceClient;
use super::dto::{MakePaymentRequest, MakePaymentResponse};
use crate::domain::foundation::DomainError;
use crate::ports::{PaymentGateway, PaymentReceipt, PaymentRequest};

/// `PaymentGateway` backed by the payment service REST API.
#[derive(Debug, Clone)]
pub struct HttpPaymentGateway {
    client: ServiceClient,
}

impl HttpPaymentGateway {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    fn make_payment_url(&self) -> String {
        self.client.url("/v1/payments/make")
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn submit(&self, request: &PaymentRequest) -> Result<PaymentReceipt, DomainError> {
        let response = self
            .client
            .http()
            .post(self.make_payment_url())
            .json(&MakePaymentRequest::from(request))
            .send()
            .await
            .map_err(|e| self.client.send_error(e))?;

        if !response.status().is_success() {
            return Err(self.client.status_error(response).await);
        }

        let body: MakePaymentResponse = self.client.decode(response).await?;
        let receipt = body.into_receipt()?;
        tracing::debug!(
            reservation_id = %request.reservation_id,
            reply = %receipt.message,
            "Payment accepted"
        );
        Ok(receipt)
    }
}
