//! Booking service adapter.

use async_trait::async_trait;

use super::client::ServiceClient;
use super::dto::ReservationDto;
use crate::domain::booking::BookingRecord;
use crate::domain::foundation::{DomainError, ReservationId, UserId};
use crate::ports::BookingGateway;

/// `BookingGateway` backed by the vehicle and booking service REST API.
#[derive(Debug, Clone)]
pub struct HttpBookingGateway {
    client: ServiceClient,
}

impl HttpBookingGateway {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    fn booking_url(&self, reservation_id: &ReservationId) -> String {
        self.client.url(&format!("/v1/bookings/{}", reservation_id))
    }

    fn user_bookings_url(&self, user_id: &UserId) -> String {
        self.client.url(&format!("/v1/bookings/user/{}", user_id))
    }
}

#[async_trait]
impl BookingGateway for HttpBookingGateway {
    async fn get_booking(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Option<BookingRecord>, DomainError> {
        let response = self
            .client
            .http()
            .get(self.booking_url(reservation_id))
            .send()
            .await
            .map_err(|e| self.client.send_error(e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(self.client.status_error(response).await);
        }

        let dto: ReservationDto = self.client.decode(response).await?;
        dto.into_record().map(Some)
    }

    async fn list_user_bookings(&self, user_id: &UserId) -> Result<Vec<BookingRecord>, DomainError> {
        let response = self
            .client
            .http()
            .get(self.user_bookings_url(user_id))
            .send()
            .await
            .map_err(|e| self.client.send_error(e))?;

        // A user without reservations may be reported as not found.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            return Err(self.client.status_error(response).await);
        }

        let dtos: Option<Vec<ReservationDto>> = self.client.decode(response).await?;
        dtos.unwrap_or_default()
            .into_iter()
            .map(ReservationDto::into_record)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::rest::test_server::StubServer;
    use crate::domain::foundation::ErrorCode;

    fn gateway() -> HttpBookingGateway {
        HttpBookingGateway::new(ServiceClient::with_client(
            "booking",
            "http://localhost:8081",
            reqwest::Client::new(),
        ))
    }

    #[test]
    fn builds_booking_url() {
        assert_eq!(
            gateway().booking_url(&ReservationId::new(31).unwrap()),
            "http://localhost:8081/v1/bookings/31"
        );
    }

    #[test]
    fn builds_user_bookings_url() {
        assert_eq!(
            gateway().user_bookings_url(&UserId::new(8).unwrap()),
            "http://localhost:8081/v1/bookings/user/8"
        );
    }

    fn gateway_for(server: &StubServer) -> HttpBookingGateway {
        HttpBookingGateway::new(server.client("booking"))
    }

    #[tokio::test]
    async fn found_booking_is_mapped() {
        let server = StubServer::respond(
            200,
            r#"{"reservation_id": 31, "vehicle_name": "BYD Atto 3", "total_cost": 80,
                "start_time": "2024-12-01T09:00:00Z", "end_time": "2024-12-01T11:00:00Z",
                "status": "Active"}"#,
        )
        .await;

        let booking = gateway_for(&server)
            .get_booking(&ReservationId::new(31).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(booking.vehicle_name, "BYD Atto 3");
        assert_eq!(server.received()[0].path, "/v1/bookings/31");
    }

    #[tokio::test]
    async fn missing_booking_is_none() {
        let server = StubServer::respond(404, "Reservation not found").await;
        let booking = gateway_for(&server)
            .get_booking(&ReservationId::new(31).unwrap())
            .await
            .unwrap();
        assert!(booking.is_none());
    }

    #[tokio::test]
    async fn user_without_history_not_found_is_empty() {
        let server = StubServer::respond(404, "No bookings found").await;
        let history = gateway_for(&server)
            .list_user_bookings(&UserId::new(8).unwrap())
            .await
            .unwrap();
        assert!(history.is_empty());
        assert_eq!(server.received()[0].path, "/v1/bookings/user/8");
    }

    #[tokio::test]
    async fn null_history_is_empty() {
        let server = StubServer::respond(200, "null").await;
        let history = gateway_for(&server)
            .list_user_bookings(&UserId::new(8).unwrap())
            .await
            .unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn server_error_is_service_unavailable() {
        let server = StubServer::respond(502, "upstream down").await;
        let err = gateway_for(&server)
            .list_user_bookings(&UserId::new(8).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ServiceUnavailable);
    }

    #[tokio::test]
    async fn malformed_body_is_unexpected_response() {
        let server = StubServer::respond(200, r#"{"reservation_id": "abc"}"#).await;
        let err = gateway_for(&server)
            .get_booking(&ReservationId::new(31).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedResponse);
    }
}
