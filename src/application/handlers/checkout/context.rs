//! Loads the booking and account a checkout is priced from.

use crate::domain::booking::BookingRecord;
use crate::domain::foundation::{ReservationId, UserId};
use crate::domain::pricing::CheckoutError;
use crate::ports::{AccountGateway, AccountRecord, BookingGateway};

/// Booking and account for one checkout.
#[derive(Debug, Clone)]
pub(super) struct CheckoutContext {
    pub booking: BookingRecord,
    pub account: AccountRecord,
}

/// Fetches the reservation, then the account. Either failure aborts.
pub(super) async fn load_checkout_context(
    bookings: &dyn BookingGateway,
    accounts: &dyn AccountGateway,
    reservation_id: &ReservationId,
    user_id: &UserId,
) -> Result<CheckoutContext, CheckoutError> {
    let booking = bookings
        .get_booking(reservation_id)
        .await
        .map_err(|e| {
            tracing::error!(reservation_id = %reservation_id, error = %e, "Failed to fetch reservation details");
            CheckoutError::collaborator("reservation", e)
        })?
        .ok_or(CheckoutError::BookingNotFound(*reservation_id))?;

    let account = accounts
        .get_account(user_id)
        .await
        .map_err(|e| {
            tracing::error!(user_id = %user_id, error = %e, "Failed to fetch membership details");
            CheckoutError::collaborator("membership", e)
        })?
        .ok_or(CheckoutError::AccountNotFound(*user_id))?;

    Ok(CheckoutContext { booking, account })
}
