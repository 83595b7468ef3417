//! EvaluateTierProgressHandler - Command handler for tier progression.

use std::sync::Arc;

use crate::domain::booking::count_qualifying_bookings;
use crate::domain::foundation::UserId;
use crate::domain::membership::{tier_progress, MembershipError, TierProgress};
use crate::ports::{AccountGateway, BookingGateway};

/// Command to evaluate a member's tier after a booking.
#[derive(Debug, Clone)]
pub struct EvaluateTierProgressCommand {
    pub user_id: UserId,
}

/// Result of a tier evaluation.
pub type EvaluateTierProgressResult = TierProgress;

/// Handler for tier progression.
///
/// Counts the member's active and completed bookings, applies the
/// progression thresholds and persists any promotion through the account
/// service. A promotion is only reported once it has been stored.
pub struct EvaluateTierProgressHandler {
    accounts: Arc<dyn AccountGateway>,
    bookings: Arc<dyn BookingGateway>,
}

impl EvaluateTierProgressHandler {
    pub fn new(accounts: Arc<dyn AccountGateway>, bookings: Arc<dyn BookingGateway>) -> Self {
        Self { accounts, bookings }
    }

    #[tracing::instrument(skip(self, cmd), fields(user_id = %cmd.user_id))]
    pub async fn handle(
        &self,
        cmd: EvaluateTierProgressCommand,
    ) -> Result<EvaluateTierProgressResult, MembershipError> {
        // 1. Load the account
        let account = self
            .accounts
            .get_account(&cmd.user_id)
            .await?
            .ok_or(MembershipError::account_not_found(cmd.user_id))?;

        // 2. Count qualifying bookings
        let history = self.bookings.list_user_bookings(&cmd.user_id).await?;
        let booking_count = count_qualifying_bookings(&history);

        // 3. Apply thresholds
        let current = account.membership_tier.effective_tier();
        let progress = tier_progress(current, booking_count);

        // 4. Persist before reporting
        if let Some(promotion) = progress.promotion() {
            self.accounts
                .update_membership_tier(&cmd.user_id, promotion.new_tier)
                .await
                .map_err(|e| {
                    tracing::error!(
                        new_tier = %promotion.new_tier,
                        error = %e,
                        "Failed to persist tier promotion"
                    );
                    MembershipError::from(e)
                })?;

            tracing::info!(
                from = %current,
                to = %promotion.new_tier,
                booking_count,
                "Member promoted"
            );
        } else {
            tracing::debug!(
                tier = %current,
                booking_count,
                progress = %progress.message,
                "No tier change"
            );
        }

        Ok(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::{BookingRecord, ReservationStatus};
    use crate::domain::foundation::{DomainError, ErrorCode, ReservationId, Timestamp};
    use crate::domain::membership::{MembershipTier, TierLabel, HIGHEST_TIER_MESSAGE};
    use crate::ports::AccountRecord;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockAccounts {
        tier: Option<&'static str>,
        exists: bool,
        fail_update: bool,
        updates: Mutex<Vec<MembershipTier>>,
    }

    impl MockAccounts {
        fn with_tier(tier: Option<&'static str>) -> Self {
            Self {
                tier,
                exists: true,
                fail_update: false,
                updates: Mutex::new(Vec::new()),
            }
        }

        fn missing() -> Self {
            Self {
                exists: false,
                ..Self::with_tier(None)
            }
        }

        fn failing_update(tier: Option<&'static str>) -> Self {
            Self {
                fail_update: true,
                ..Self::with_tier(tier)
            }
        }
    }

    #[async_trait]
    impl AccountGateway for MockAccounts {
        async fn get_account(&self, user_id: &UserId) -> Result<Option<AccountRecord>, DomainError> {
            if !self.exists {
                return Ok(None);
            }
            Ok(Some(AccountRecord {
                user_id: *user_id,
                email: "rider@example.com".to_string(),
                membership_tier: TierLabel::parse(self.tier),
            }))
        }

        async fn update_membership_tier(
            &self,
            _user_id: &UserId,
            tier: MembershipTier,
        ) -> Result<(), DomainError> {
            if self.fail_update {
                return Err(DomainError::new(ErrorCode::ServiceUnavailable, "account service down"));
            }
            self.updates.lock().unwrap().push(tier);
            Ok(())
        }
    }

    struct MockBookings {
        history: Vec<BookingRecord>,
    }

    impl MockBookings {
        fn with_statuses(statuses: &[(ReservationStatus, usize)]) -> Self {
            let start = Timestamp::now();
            let mut history = Vec::new();
            let mut next_id = 1;
            for (status, count) in statuses {
                for _ in 0..*count {
                    history.push(BookingRecord {
                        reservation_id: ReservationId::new(next_id).unwrap(),
                        vehicle_name: "Tesla Model 3".to_string(),
                        hourly_rate: Decimal::from(30),
                        base_cost: Decimal::from(60),
                        start_time: start,
                        end_time: start.plus_hours(2),
                        status: status.clone(),
                    });
                    next_id += 1;
                }
            }
            Self { history }
        }
    }

    #[async_trait]
    impl BookingGateway for MockBookings {
        async fn get_booking(
            &self,
            reservation_id: &ReservationId,
        ) -> Result<Option<BookingRecord>, DomainError> {
            Ok(self
                .history
                .iter()
                .find(|b| b.reservation_id == *reservation_id)
                .cloned())
        }

        async fn list_user_bookings(
            &self,
            _user_id: &UserId,
        ) -> Result<Vec<BookingRecord>, DomainError> {
            Ok(self.history.clone())
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn command() -> EvaluateTierProgressCommand {
        EvaluateTierProgressCommand {
            user_id: UserId::new(12).unwrap(),
        }
    }

    fn active(count: usize) -> MockBookings {
        MockBookings::with_statuses(&[(ReservationStatus::Active, count)])
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn promotion_is_persisted_then_reported() {
        let accounts = Arc::new(MockAccounts::with_tier(Some("Basic")));
        let handler = EvaluateTierProgressHandler::new(accounts.clone(), Arc::new(active(5)));

        let progress = handler.handle(command()).await.unwrap();
        assert_eq!(progress.promoted_to, Some(MembershipTier::Premium));
        assert_eq!(*accounts.updates.lock().unwrap(), vec![MembershipTier::Premium]);
    }

    #[tokio::test]
    async fn no_persistence_without_change() {
        let accounts = Arc::new(MockAccounts::with_tier(Some("Basic")));
        let handler = EvaluateTierProgressHandler::new(accounts.clone(), Arc::new(active(4)));

        let progress = handler.handle(command()).await.unwrap();
        assert_eq!(progress.message, "1 more booking(s) to reach Premium");
        assert!(accounts.updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn cancelled_bookings_do_not_count() {
        let accounts = Arc::new(MockAccounts::with_tier(Some("Basic")));
        let bookings = MockBookings::with_statuses(&[
            (ReservationStatus::Completed, 3),
            (ReservationStatus::Cancelled, 4),
        ]);
        let handler = EvaluateTierProgressHandler::new(accounts.clone(), Arc::new(bookings));

        let progress = handler.handle(command()).await.unwrap();
        assert_eq!(progress.booking_count, 3);
        assert_eq!(progress.bookings_remaining, 2);
        assert!(accounts.updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn vip_stays_at_highest_tier() {
        let accounts = Arc::new(MockAccounts::with_tier(Some("VIP")));
        let handler = EvaluateTierProgressHandler::new(accounts.clone(), Arc::new(active(40)));

        let progress = handler.handle(command()).await.unwrap();
        assert_eq!(progress.current_tier, MembershipTier::Vip);
        assert_eq!(progress.message, HIGHEST_TIER_MESSAGE);
        assert!(accounts.updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_tier_progresses_from_basic() {
        let accounts = Arc::new(MockAccounts::with_tier(None));
        let handler = EvaluateTierProgressHandler::new(accounts.clone(), Arc::new(active(16)));

        let progress = handler.handle(command()).await.unwrap();
        assert_eq!(progress.promoted_to, Some(MembershipTier::Vip));
        assert_eq!(*accounts.updates.lock().unwrap(), vec![MembershipTier::Vip]);
    }

    #[tokio::test]
    async fn basic_at_fifteen_stores_one_vip_update() {
        let accounts = Arc::new(MockAccounts::with_tier(Some("Basic")));
        let handler = EvaluateTierProgressHandler::new(accounts.clone(), Arc::new(active(15)));

        let progress = handler.handle(command()).await.unwrap();
        assert_eq!(progress.promoted_to, Some(MembershipTier::Vip));
        assert_eq!(progress.message, "promoted to VIP");
        assert_eq!(*accounts.updates.lock().unwrap(), vec![MembershipTier::Vip]);
    }

    #[tokio::test]
    async fn persistence_failure_aborts_report() {
        let accounts = Arc::new(MockAccounts::failing_update(Some("Premium")));
        let handler = EvaluateTierProgressHandler::new(accounts, Arc::new(active(15)));

        let err = handler.handle(command()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }

    #[tokio::test]
    async fn missing_account_fails() {
        let handler =
            EvaluateTierProgressHandler::new(Arc::new(MockAccounts::missing()), Arc::new(active(5)));

        let err = handler.handle(command()).await.unwrap_err();
        assert_eq!(err, MembershipError::AccountNotFound(UserId::new(12).unwrap()));
    }
}
