//! Promotion service adapter.

use async_trait::async_trait;

use super::client::ServiceClient;
use super::dto::{ApplyPromoRequest, ApplyPromoResponse};
use crate::domain::foundation::{DomainError, ReservationId};
use crate::domain::membership::PromoCode;
use crate::ports::{PromoInvalidReason, PromoLookup, PromotionGateway};

/// `PromotionGateway` backed by the payment service REST API.
///
/// The service answers 404 both for unknown codes and for codes outside
/// their validity window.
#[derive(Debug, Clone)]
pub struct HttpPromotionGateway {
    client: ServiceClient,
}

impl HttpPromotionGateway {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    fn apply_url(&self) -> String {
        self.client.url("/v1/promotions/apply")
    }
}

#[async_trait]
impl PromotionGateway for HttpPromotionGateway {
    async fn apply(
        &self,
        code: &PromoCode,
        reservation_id: &ReservationId,
    ) -> Result<PromoLookup, DomainError> {
        let request = ApplyPromoRequest {
            promo_code: code.as_str(),
            reservation_id: reservation_id.value(),
        };

        let response = self
            .client
            .http()
            .post(self.apply_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.client.send_error(e))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(PromoLookup::Invalid(PromoInvalidReason::NotFoundOrExpired));
        }

        if status == reqwest::StatusCode::BAD_REQUEST {
            let detail = response.text().await.unwrap_or_default();
            return Ok(PromoLookup::Invalid(PromoInvalidReason::Rejected {
                detail: detail.trim().to_string(),
            }));
        }

        if !status.is_success() {
            return Err(self.client.status_error(response).await);
        }

        let body: ApplyPromoResponse = self.client.decode(response).await?;
        Ok(PromoLookup::valid(body.percentage()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::rest::test_server::StubServer;
    use crate::domain::foundation::{ErrorCode, Percentage};

    async fn apply_against(
        status: u16,
        body: &'static str,
    ) -> (StubServer, Result<PromoLookup, DomainError>) {
        let server = StubServer::respond(status, body).await;
        let gateway = HttpPromotionGateway::new(server.client("payment"));
        let result = gateway
            .apply(
                &PromoCode::try_new("SPRING20").unwrap(),
                &ReservationId::new(55).unwrap(),
            )
            .await;
        (server, result)
    }

    #[test]
    fn builds_apply_url() {
        let gateway = HttpPromotionGateway::new(ServiceClient::with_client(
            "payment",
            "http://localhost:8082/",
            reqwest::Client::new(),
        ));
        assert_eq!(gateway.apply_url(), "http://localhost:8082/v1/promotions/apply");
    }

    #[tokio::test]
    async fn live_code_returns_discount() {
        let (server, result) =
            apply_against(200, r#"{"discount_percentage": 20, "discount_amount": 18}"#).await;
        assert_eq!(result.unwrap(), PromoLookup::valid(Percentage::whole(20)));

        let received = server.received();
        assert_eq!(received[0].method, "POST");
        assert_eq!(received[0].path, "/v1/promotions/apply");
        let body: serde_json::Value = serde_json::from_str(&received[0].body).unwrap();
        assert_eq!(body, serde_json::json!({ "promo_code": "SPRING20", "reservation_id": 55 }));
    }

    #[tokio::test]
    async fn not_found_means_invalid_or_expired() {
        let (_server, result) = apply_against(404, "Invalid or expired promo code").await;
        assert_eq!(
            result.unwrap(),
            PromoLookup::Invalid(PromoInvalidReason::NotFoundOrExpired)
        );
    }

    #[tokio::test]
    async fn bad_request_is_rejected_with_body_detail() {
        let (_server, result) = apply_against(400, "  Missing required fields \n").await;
        assert_eq!(
            result.unwrap(),
            PromoLookup::Invalid(PromoInvalidReason::Rejected {
                detail: "Missing required fields".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn server_error_is_a_collaborator_failure() {
        let (_server, result) = apply_against(500, "database unavailable").await;
        assert_eq!(result.unwrap_err().code, ErrorCode::ServiceUnavailable);
    }

    #[tokio::test]
    async fn out_of_range_discount_is_unexpected() {
        let (_server, result) = apply_against(200, r#"{"discount_percentage": 140}"#).await;
        assert_eq!(result.unwrap_err().code, ErrorCode::UnexpectedResponse);
    }
}
