//! Booking domain module.
//!
//! Reservation records consumed from the booking service, rental duration,
//! and the qualifying-booking count behind tier progression.

mod reservation;

pub use reservation::{
    count_qualifying_bookings, rental_duration_hours, BookingRecord, ReservationStatus,
    UNKNOWN_VEHICLE,
};
