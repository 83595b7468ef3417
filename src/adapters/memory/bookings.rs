//! In-memory booking store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{read, write};
use crate::domain::booking::BookingRecord;
use crate::domain::foundation::{DomainError, ReservationId, UserId};
use crate::ports::BookingGateway;

#[derive(Debug, Default)]
struct Store {
    by_id: HashMap<ReservationId, BookingRecord>,
    owners: HashMap<ReservationId, UserId>,
}

/// `BookingGateway` over reservations keyed by id and owner.
#[derive(Debug, Default)]
pub struct InMemoryBookings {
    store: RwLock<Store>,
}

impl InMemoryBookings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a reservation owned by `user_id`.
    pub fn insert(&self, user_id: UserId, booking: BookingRecord) {
        let mut store = write(&self.store);
        store.owners.insert(booking.reservation_id, user_id);
        store.by_id.insert(booking.reservation_id, booking);
    }
}

#[async_trait]
impl BookingGateway for InMemoryBookings {
    async fn get_booking(
        &self,
        reservation_id: &ReservationId,
    ) -> Result<Option<BookingRecord>, DomainError> {
        Ok(read(&self.store).by_id.get(reservation_id).cloned())
    }

    async fn list_user_bookings(&self, user_id: &UserId) -> Result<Vec<BookingRecord>, DomainError> {
        let store = read(&self.store);
        let mut bookings: Vec<BookingRecord> = store
            .owners
            .iter()
            .filter(|(_, owner)| *owner == user_id)
            .filter_map(|(id, _)| store.by_id.get(id).cloned())
            .collect();
        bookings.sort_by_key(|b| b.reservation_id);
        Ok(bookings)
    }
}
