//! In-memory payment ledger.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{read, write};
use crate::domain::foundation::{DomainError, ReservationId};
use crate::ports::{PaymentGateway, PaymentReceipt, PaymentRequest};

/// `PaymentGateway` that accepts every payment and keeps a log.
///
/// Like the payment service, the first payment for a reservation fixes its
/// invoice amounts; later payments are logged against the same invoice.
#[derive(Debug, Default)]
pub struct InMemoryPayments {
    payments: RwLock<Vec<PaymentRequest>>,
    invoiced: RwLock<HashMap<ReservationId, PaymentRequest>>,
}

impl InMemoryPayments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payments in the order they were submitted.
    pub fn payments(&self) -> Vec<PaymentRequest> {
        read(&self.payments).clone()
    }

    /// The payment that created the invoice for a reservation.
    pub fn invoice(&self, reservation_id: &ReservationId) -> Option<PaymentRequest> {
        read(&self.invoiced).get(reservation_id).cloned()
    }
}

#[async_trait]
impl PaymentGateway for InMemoryPayments {
    async fn submit(&self, request: &PaymentRequest) -> Result<PaymentReceipt, DomainError> {
        write(&self.invoiced)
            .entry(request.reservation_id)
            .or_insert_with(|| request.clone());
        write(&self.payments).push(request.clone());
        Ok(PaymentReceipt {
            message: "Payment processed successfully.".to_string(),
        })
    }
}
