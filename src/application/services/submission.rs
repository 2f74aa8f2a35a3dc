//! # Submission Guard
//!
//! Validates and rate-limits incoming price submissions before they reach
//! the price store.
//!
//! The rate check runs first because every attempt counts against the
//! caller's window and an over-limit attempt must be rejected with the
//! rate-limit error even when the submission itself would be invalid.
//! Validation then runs in a fixed order, each failure distinct, and only a
//! fully valid submission produces a store write. No rejection path has
//! side effects beyond the rate-limit bookkeeping. An accepted submission's
//! store write runs on a detached task, so a caller disconnecting after the
//! attempt was counted does not cancel the write.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::rate_limit::SlidingWindowRateLimiter;
use crate::domain::entities::PriceRecord;
use crate::domain::value_objects::{CallerId, FuelType, Price, StationId};
use crate::infrastructure::persistence::{PriceRepository, RepositoryError};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

/// Guard in front of the price store for community submissions.
#[derive(Debug)]
pub struct SubmissionGuard {
    repository: Arc<dyn PriceRepository>,
    limiter: Arc<SlidingWindowRateLimiter>,
}

impl SubmissionGuard {
    /// Creates a new submission guard.
    #[must_use]
    pub fn new(
        repository: Arc<dyn PriceRepository>,
        limiter: Arc<SlidingWindowRateLimiter>,
    ) -> Self {
        Self {
            repository,
            limiter,
        }
    }

    /// Validates a submission and, if accepted, persists it.
    ///
    /// `fuel_type` and `price` arrive as raw client strings so that every
    /// distinct validation failure originates here.
    ///
    /// # Errors
    ///
    /// - `RateLimitExceeded` when the caller is over its attempt window
    /// - `InvalidStationId`, `InvalidFuelType`, `InvalidPrice`,
    ///   `PriceOutOfRange` for the corresponding validation failures
    /// - `Store` when the repository write fails
    pub async fn submit(
        &self,
        caller: &CallerId,
        station_id: &str,
        fuel_type: &str,
        price: &str,
    ) -> ApplicationResult<PriceRecord> {
        if !self.limiter.try_acquire(caller) {
            tracing::warn!(caller = %caller, "submission rejected: rate limit exceeded");
            return Err(ApplicationError::RateLimitExceeded);
        }

        let station_id = validate_station_id(station_id)?;
        let fuel_type = parse_fuel_type(fuel_type)?;
        let price = parse_price(price)?;

        // Past the rate check the attempt is already counted, so the write
        // runs on a detached task and lands even if the caller disconnects
        // before the response.
        let repository = Arc::clone(&self.repository);
        let write =
            tokio::spawn(async move { repository.record(&station_id, fuel_type, price).await });
        let record = write.await.map_err(|e| {
            ApplicationError::Store(RepositoryError::internal(format!(
                "submission write task failed: {e}"
            )))
        })??;

        tracing::info!(
            station = %record.station_id,
            fuel = %record.fuel_type,
            price = %record.price,
            "price submission accepted"
        );
        Ok(record)
    }
}

fn validate_station_id(raw: &str) -> ApplicationResult<StationId> {
    let id = StationId::new(raw);
    if id.is_well_formed() {
        Ok(id)
    } else {
        Err(ApplicationError::invalid_station_id(format!(
            "station id must be non-empty and at most {} characters",
            StationId::MAX_LENGTH
        )))
    }
}

fn parse_fuel_type(raw: &str) -> ApplicationResult<FuelType> {
    raw.parse::<FuelType>()
        .map_err(|e| ApplicationError::invalid_fuel_type(e.to_string()))
}

fn parse_price(raw: &str) -> ApplicationResult<Price> {
    let value = Decimal::from_str(raw)
        .map_err(|_| ApplicationError::invalid_price("price must be a valid number"))?;

    // Bounds apply to the raw value; rounding happens only once the value
    // is known to be in range.
    Price::submittable(value).ok_or_else(|| {
        ApplicationError::price_out_of_range(format!(
            "price must be between ${:.2} and ${:.2}",
            Price::min_submittable(),
            Price::max_submittable()
        ))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::services::rate_limit::RateLimitConfig;
    use crate::infrastructure::persistence::{InMemoryPriceRepository, RepositoryResult};
    use std::time::Duration;

    fn guard_with_limit(max_attempts: usize) -> (SubmissionGuard, Arc<InMemoryPriceRepository>) {
        let repository = Arc::new(InMemoryPriceRepository::new());
        let limiter = Arc::new(SlidingWindowRateLimiter::new(RateLimitConfig {
            max_attempts,
            window: Duration::from_secs(60),
        }));
        (
            SubmissionGuard::new(repository.clone(), limiter),
            repository,
        )
    }

    fn caller() -> CallerId {
        CallerId::new("10.0.0.1")
    }

    #[tokio::test]
    async fn valid_submission_is_persisted() {
        let (guard, repository) = guard_with_limit(20);

        let record = guard
            .submit(&caller(), "station-1", "regular", "3.45")
            .await
            .unwrap();

        assert_eq!(record.station_id.as_str(), "station-1");
        assert_eq!(record.fuel_type, FuelType::Regular);
        assert_eq!(record.price.display(), "$3.45");

        let stored = repository
            .latest(&StationId::new("station-1"), FuelType::Regular)
            .await
            .unwrap();
        assert_eq!(stored, Some(record));
    }

    #[tokio::test]
    async fn empty_station_id_is_rejected() {
        let (guard, repository) = guard_with_limit(20);
        let err = guard
            .submit(&caller(), "", "regular", "3.45")
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidStationId(_)));
        assert!(repository.is_empty());
    }

    #[tokio::test]
    async fn oversized_station_id_is_rejected() {
        let (guard, _) = guard_with_limit(20);
        let long_id = "x".repeat(StationId::MAX_LENGTH + 1);
        let err = guard
            .submit(&caller(), &long_id, "regular", "3.45")
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidStationId(_)));
    }

    #[tokio::test]
    async fn unknown_fuel_type_is_rejected() {
        let (guard, repository) = guard_with_limit(20);
        let err = guard
            .submit(&caller(), "station-1", "kerosene", "3.45")
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidFuelType(_)));
        assert!(repository.is_empty());
    }

    #[tokio::test]
    async fn unparseable_price_is_rejected() {
        let (guard, repository) = guard_with_limit(20);
        let err = guard
            .submit(&caller(), "station-1", "regular", "cheap")
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidPrice(_)));
        assert!(repository.is_empty());
    }

    #[tokio::test]
    async fn out_of_range_price_is_rejected_without_persisting() {
        let (guard, repository) = guard_with_limit(20);

        for raw in ["0.50", "10.01", "-3.45", "0", "0.995", "10.004"] {
            let err = guard
                .submit(&caller(), "station-1", "regular", raw)
                .await
                .unwrap_err();
            assert!(
                matches!(err, ApplicationError::PriceOutOfRange(_)),
                "price {raw} should be out of range"
            );
        }
        assert!(repository.is_empty());
    }

    #[tokio::test]
    async fn boundary_prices_are_accepted() {
        let (guard, _) = guard_with_limit(20);
        assert!(guard
            .submit(&caller(), "station-1", "regular", "1.00")
            .await
            .is_ok());
        assert!(guard
            .submit(&caller(), "station-1", "regular", "10.00")
            .await
            .is_ok());
    }

    #[derive(Debug)]
    struct SlowRepository {
        inner: InMemoryPriceRepository,
        delay: Duration,
    }

    #[async_trait::async_trait]
    impl PriceRepository for SlowRepository {
        async fn record(
            &self,
            station_id: &StationId,
            fuel_type: FuelType,
            price: Price,
        ) -> RepositoryResult<PriceRecord> {
            tokio::time::sleep(self.delay).await;
            self.inner.record(station_id, fuel_type, price).await
        }

        async fn latest(
            &self,
            station_id: &StationId,
            fuel_type: FuelType,
        ) -> RepositoryResult<Option<PriceRecord>> {
            self.inner.latest(station_id, fuel_type).await
        }
    }

    #[tokio::test]
    async fn accepted_submission_survives_a_dropped_caller() {
        let inner = InMemoryPriceRepository::new();
        let repository = Arc::new(SlowRepository {
            inner: inner.clone(),
            delay: Duration::from_millis(50),
        });
        let limiter = Arc::new(SlidingWindowRateLimiter::new(RateLimitConfig {
            max_attempts: 20,
            window: Duration::from_secs(60),
        }));
        let guard = SubmissionGuard::new(repository, limiter);
        let caller = caller();

        {
            let submit = guard.submit(&caller, "station-1", "regular", "3.45");
            tokio::pin!(submit);
            // Drive the future far enough to count the attempt and start
            // the write, then drop it as a disconnecting client would.
            assert!(futures::poll!(submit.as_mut()).is_pending());
        }

        tokio::time::sleep(Duration::from_millis(100)).await;
        let stored = inner
            .latest(&StationId::new("station-1"), FuelType::Regular)
            .await
            .unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn twenty_first_attempt_is_rate_limited() {
        let (guard, _) = guard_with_limit(20);
        let caller = caller();

        for _ in 0..20 {
            guard
                .submit(&caller, "station-1", "regular", "3.45")
                .await
                .unwrap();
        }

        let err = guard
            .submit(&caller, "station-1", "regular", "3.45")
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::RateLimitExceeded));
    }

    #[tokio::test]
    async fn rate_limit_applies_regardless_of_validity() {
        let (guard, _) = guard_with_limit(1);
        let caller = caller();

        guard
            .submit(&caller, "station-1", "regular", "3.45")
            .await
            .unwrap();

        // The over-limit attempt carries an invalid price but must still be
        // rejected with the rate-limit error.
        let err = guard
            .submit(&caller, "station-1", "regular", "not-a-price")
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::RateLimitExceeded));
    }

    #[tokio::test]
    async fn invalid_attempts_count_against_the_limit() {
        let (guard, _) = guard_with_limit(2);
        let caller = caller();

        // Two invalid attempts exhaust the window.
        for _ in 0..2 {
            let err = guard
                .submit(&caller, "station-1", "regular", "bogus")
                .await
                .unwrap_err();
            assert!(matches!(err, ApplicationError::InvalidPrice(_)));
        }

        let err = guard
            .submit(&caller, "station-1", "regular", "3.45")
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::RateLimitExceeded));
    }
}
