//! ElectriGo - Rental pricing and membership engine
//!
//! This crate prices vehicle rentals with membership and promotional
//! discounts and moves members between loyalty tiers as their bookings
//! accumulate.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
