//! In-memory adapters for development and tests.
//!
//! Each store keeps its records behind an `RwLock`. A poisoned lock is
//! recovered rather than propagated, since the stored data is plain values.

mod accounts;
mod bookings;
mod payments;
mod promotions;

pub use accounts::InMemoryAccounts;
pub use bookings::InMemoryBookings;
pub use payments::InMemoryPayments;
pub use promotions::InMemoryPromotions;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
