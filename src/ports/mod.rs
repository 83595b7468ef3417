//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the ElectriGo backend services. Adapters implement these
//! ports.
//!
//! - `AccountGateway` - Account lookup and tier persistence
//! - `BookingGateway` - Reservation lookup and per-user history
//! - `PromotionGateway` - Promo code lookup
//! - `PaymentGateway` - Payment submission

mod account_gateway;
mod booking_gateway;
mod payment_gateway;
mod promotion_gateway;

pub use account_gateway::{AccountGateway, AccountRecord};
pub use booking_gateway::BookingGateway;
pub use payment_gateway::{PaymentGateway, PaymentReceipt, PaymentRequest};
pub use promotion_gateway::{PromoInvalidReason, PromoLookup, PromotionGateway};
