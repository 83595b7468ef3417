//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `rest` - `reqwest` clients for the ElectriGo account, booking and payment services
//! - `memory` - In-memory stores for development and tests

pub mod memory;
pub mod rest;

pub use memory::{InMemoryAccounts, InMemoryBookings, InMemoryPayments, InMemoryPromotions};
pub use rest::{
    HttpAccountGateway, HttpBookingGateway, HttpPaymentGateway, HttpPromotionGateway, RestGateways,
};
