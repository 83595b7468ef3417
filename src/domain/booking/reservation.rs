//! Reservation records as returned by the booking service.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::foundation::{ReservationId, Timestamp};

/// Placeholder shown when the booking service omits the vehicle name.
pub const UNKNOWN_VEHICLE: &str = "Unknown Vehicle";

/// Lifecycle status of a reservation.
///
/// The booking service writes `Active` on creation and `Cancelled` on
/// cancellation; comparisons are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ReservationStatus {
    Active,
    Completed,
    Cancelled,
    /// Any status this crate does not recognise.
    Other(String),
}

impl ReservationStatus {
    /// Classifies a raw status string.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => ReservationStatus::Active,
            "completed" => ReservationStatus::Completed,
            "cancelled" | "canceled" => ReservationStatus::Cancelled,
            _ => ReservationStatus::Other(raw.trim().to_string()),
        }
    }

    /// Returns true if a reservation in this status counts towards tier
    /// progression.
    pub fn counts_towards_tier(&self) -> bool {
        matches!(self, ReservationStatus::Active | ReservationStatus::Completed)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReservationStatus::Active => write!(f, "Active"),
            ReservationStatus::Completed => write!(f, "Completed"),
            ReservationStatus::Cancelled => write!(f, "Cancelled"),
            ReservationStatus::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// Booking details needed for pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRecord {
    pub reservation_id: ReservationId,
    pub vehicle_name: String,
    pub hourly_rate: Decimal,
    /// Pre-discount rental charge computed by the booking service.
    pub base_cost: Decimal,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub status: ReservationStatus,
}

impl BookingRecord {
    /// Rental duration in whole hours.
    pub fn duration_hours(&self) -> u32 {
        rental_duration_hours(&self.start_time, &self.end_time)
    }
}

/// Rental duration rounded up to the next whole hour. Zero if `end <= start`.
pub fn rental_duration_hours(start: &Timestamp, end: &Timestamp) -> u32 {
    let seconds = end.duration_since(start).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    let hours = (seconds + 3599) / 3600;
    u32::try_from(hours).unwrap_or(u32::MAX)
}

/// Counts the bookings that count towards tier progression.
pub fn count_qualifying_bookings<'a, I>(bookings: I) -> u32
where
    I: IntoIterator<Item = &'a BookingRecord>,
{
    let count = bookings
        .into_iter()
        .filter(|b| b.status.counts_towards_tier())
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(hour: u32, minute: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 12, 1, hour, minute, 0).unwrap())
    }

    fn booking(id: u64, status: &str) -> BookingRecord {
        BookingRecord {
            reservation_id: ReservationId::new(id).unwrap(),
            vehicle_name: "Nissan Leaf".to_string(),
            hourly_rate: Decimal::from(12),
            base_cost: Decimal::from(24),
            start_time: at(9, 0),
            end_time: at(11, 0),
            status: ReservationStatus::parse(status),
        }
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(ReservationStatus::parse("Active"), ReservationStatus::Active);
        assert_eq!(ReservationStatus::parse("COMPLETED"), ReservationStatus::Completed);
        assert_eq!(ReservationStatus::parse("cancelled"), ReservationStatus::Cancelled);
        assert_eq!(
            ReservationStatus::parse("Pending"),
            ReservationStatus::Other("Pending".to_string())
        );
    }

    #[test]
    fn only_active_and_completed_count() {
        assert!(ReservationStatus::Active.counts_towards_tier());
        assert!(ReservationStatus::Completed.counts_towards_tier());
        assert!(!ReservationStatus::Cancelled.counts_towards_tier());
        assert!(!ReservationStatus::Other("Pending".into()).counts_towards_tier());
    }

    #[test]
    fn counts_qualifying_bookings() {
        let bookings = vec![
            booking(1, "Active"),
            booking(2, "Cancelled"),
            booking(3, "completed"),
            booking(4, "Pending"),
        ];
        assert_eq!(count_qualifying_bookings(&bookings), 2);
    }

    #[test]
    fn no_bookings_count_zero() {
        let none: Vec<BookingRecord> = Vec::new();
        assert_eq!(count_qualifying_bookings(&none), 0);
    }

    #[test]
    fn duration_rounds_up_partial_hours() {
        assert_eq!(rental_duration_hours(&at(9, 0), &at(11, 0)), 2);
        assert_eq!(rental_duration_hours(&at(9, 0), &at(11, 1)), 3);
        assert_eq!(rental_duration_hours(&at(9, 0), &at(9, 30)), 1);
    }

    #[test]
    fn duration_is_zero_for_inverted_range() {
        assert_eq!(rental_duration_hours(&at(11, 0), &at(9, 0)), 0);
        assert_eq!(rental_duration_hours(&at(9, 0), &at(9, 0)), 0);
    }

    #[test]
    fn booking_exposes_duration() {
        assert_eq!(booking(1, "Active").duration_hours(), 2);
    }
}
