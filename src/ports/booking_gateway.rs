//! Booking service port.

use async_trait::async_trait;

use crate::domain::booking::BookingRecord;
use crate::domain::foundation::{DomainError, ReservationId, UserId};

/// Port for the ElectriGo booking service.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// Fetches a single reservation.
    ///
    /// Returns `None` if the reservation does not exist.
    async fn get_booking(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Option<BookingRecord>, DomainError>;

    /// Lists every reservation the user has made, in any status.
    async fn list_user_bookings(&self, user_id: &UserId) -> Result<Vec<BookingRecord>, DomainError>;
}
