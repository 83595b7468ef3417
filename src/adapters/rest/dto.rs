//! Wire types exchanged with the ElectriGo REST services.
//!
//! Fields the services may omit are optional here and defaulted when mapped
//! to domain records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::booking::{BookingRecord, ReservationStatus, UNKNOWN_VEHICLE};
use crate::domain::foundation::{DomainError, ErrorCode, Percentage, ReservationId, Timestamp, UserId};
use crate::domain::membership::{MembershipTier, TierLabel};
use crate::ports::{AccountRecord, PaymentReceipt, PaymentRequest};

/// Reservation as returned by `GET /v1/bookings/{id}` and `/v1/bookings/user/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationDto {
    pub reservation_id: u64,
    #[serde(default)]
    pub vehicle_name: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    #[serde(default)]
    pub total_cost: Option<Decimal>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ReservationDto {
    pub fn into_record(self) -> Result<BookingRecord, DomainError> {
        let reservation_id = ReservationId::new(self.reservation_id).map_err(|e| {
            DomainError::new(ErrorCode::UnexpectedResponse, e.to_string())
                .with_detail("service", "booking")
        })?;

        Ok(BookingRecord {
            reservation_id,
            vehicle_name: self
                .vehicle_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_VEHICLE.to_string()),
            hourly_rate: self.hourly_rate.unwrap_or(Decimal::ZERO),
            base_cost: self.total_cost.unwrap_or(Decimal::ZERO),
            start_time: Timestamp::from_datetime(self.start_time),
            end_time: Timestamp::from_datetime(self.end_time),
            status: ReservationStatus::parse(self.status.as_deref().unwrap_or_default()),
        })
    }
}

/// User profile as returned by `GET /v1/account/user/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountDto {
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub membership_tier: Option<String>,
}

impl AccountDto {
    /// Maps to a record for `requested`. The path id wins over the body.
    pub fn into_record(self, requested: UserId) -> AccountRecord {
        if let Some(id) = self.user_id.filter(|id| *id != requested.value()) {
            tracing::warn!(requested = %requested, returned = id, "Account service returned a different user id");
        }
        AccountRecord {
            user_id: requested,
            email: self.email.unwrap_or_default(),
            membership_tier: TierLabel::parse(self.membership_tier.as_deref()),
        }
    }
}

/// Body of `PUT /v1/account/user/{id}` when persisting a promotion.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTierRequest {
    pub membership_tier: &'static str,
}

impl From<MembershipTier> for UpdateTierRequest {
    fn from(tier: MembershipTier) -> Self {
        Self {
            membership_tier: tier.display_name(),
        }
    }
}

/// Body of `POST /v1/promotions/apply`.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyPromoRequest<'a> {
    pub promo_code: &'a str,
    pub reservation_id: u64,
}

/// Response of `POST /v1/promotions/apply`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyPromoResponse {
    pub discount_percentage: Decimal,
    #[serde(default)]
    pub discount_amount: Option<Decimal>,
    #[serde(default)]
    pub total_cost_after_promo: Option<Decimal>,
}

impl ApplyPromoResponse {
    pub fn percentage(&self) -> Result<Percentage, DomainError> {
        Percentage::try_new(self.discount_percentage).map_err(|e| {
            DomainError::new(ErrorCode::UnexpectedResponse, e.to_string())
                .with_detail("service", "payment")
        })
    }
}

/// Body of `POST /v1/payments/make`.
#[derive(Debug, Clone, Serialize)]
pub struct MakePaymentRequest<'a> {
    pub reservation_id: u64,
    pub payment_method: &'a str,
    pub user_id: u64,
    pub total_cost: Decimal,
    pub membership_discount: Decimal,
    pub promo_discount: Decimal,
}

impl<'a> From<&'a PaymentRequest> for MakePaymentRequest<'a> {
    fn from(request: &'a PaymentRequest) -> Self {
        Self {
            reservation_id: request.reservation_id.value(),
            payment_method: request.payment_method.as_str(),
            user_id: request.user_id.value(),
            total_cost: request.total_cost,
            membership_discount: request.membership_discount,
            promo_discount: request.promo_discount,
        }
    }
}

/// Response of `POST /v1/payments/make`.
#[derive(Debug, Clone, Deserialize)]
pub struct MakePaymentResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl MakePaymentResponse {
    /// Maps to a receipt. An explicit `success: false` is a refusal.
    pub fn into_receipt(self) -> Result<PaymentReceipt, DomainError> {
        let message = self.message.unwrap_or_default();
        if self.success == Some(false) {
            return Err(DomainError::new(
                ErrorCode::UnexpectedResponse,
                format!("payment service reported failure: {}", message),
            )
            .with_detail("service", "payment"));
        }
        Ok(PaymentReceipt { message })
    }
}
