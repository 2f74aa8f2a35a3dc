//! # Price Store Port
//!
//! Trait abstracting durable storage of price submissions.
//!
//! The store is keyed by (station identifier, fuel type). It may retain
//! history or keep only the newest record per key; the contract only
//! requires that `latest` resolves to the record with the maximum
//! service-assigned timestamp.

use crate::domain::entities::PriceRecord;
use crate::domain::value_objects::{FuelType, Price, StationId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for price store operations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The storage backend could not be reached.
    #[error("price store unavailable: {0}")]
    Unavailable(String),

    /// Unexpected storage-layer failure.
    #[error("price store internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Result type for price store operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Port for persisting and reading community price submissions.
#[async_trait]
pub trait PriceRepository: Send + Sync + fmt::Debug {
    /// Appends a price submission, assigning the current server time as its
    /// timestamp, and returns the created record.
    ///
    /// Concurrent calls for the same key must not corrupt state: whichever
    /// record carries the later assigned timestamp must end up current,
    /// independent of physical write order.
    ///
    /// # Errors
    ///
    /// Returns a `RepositoryError` on storage-layer faults.
    async fn record(
        &self,
        station_id: &StationId,
        fuel_type: FuelType,
        price: Price,
    ) -> RepositoryResult<PriceRecord>;

    /// Returns the current (maximum-timestamp) record for the key, or
    /// `None` when no submission exists.
    ///
    /// # Errors
    ///
    /// Returns a `RepositoryError` on storage-layer faults; absence of data
    /// is `Ok(None)`, never an error.
    async fn latest(
        &self,
        station_id: &StationId,
        fuel_type: FuelType,
    ) -> RepositoryResult<Option<PriceRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let error = RepositoryError::unavailable("connection refused");
        assert!(error.to_string().contains("unavailable"));
        assert!(error.to_string().contains("connection refused"));

        let error = RepositoryError::internal("corrupt row");
        assert!(error.to_string().contains("internal"));
    }
}
