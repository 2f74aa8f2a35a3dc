//! # In-Memory Price Repository
//!
//! Latest-wins in-memory implementation of [`PriceRepository`].
//!
//! Keeps a single record per (station, fuel type) key inside a thread-safe
//! `HashMap`. The submission timestamp is assigned and compared while the
//! write lock is held, so two submissions racing for the same key cannot
//! corrupt state and the one with the later timestamp ends up current
//! regardless of scheduling.

use crate::domain::entities::PriceRecord;
use crate::domain::value_objects::{FuelType, Price, StationId, Timestamp};
use crate::infrastructure::persistence::traits::{
    PriceRepository, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type Key = (StationId, FuelType);

/// In-memory implementation of [`PriceRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryPriceRepository {
    storage: Arc<RwLock<HashMap<Key, PriceRecord>>>,
}

impl InMemoryPriceRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of keys holding a current price.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if no prices are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all stored prices.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }

    /// Inserts `record` unless the stored record for the key has a strictly
    /// newer timestamp. Equal timestamps resolve to the incoming record, so
    /// the later write wins a tie.
    async fn upsert_if_newer(&self, record: PriceRecord) {
        let mut storage = self.storage.write().await;
        let key = (record.station_id.clone(), record.fuel_type);
        match storage.get(&key) {
            Some(existing) if existing.submitted_at > record.submitted_at => {}
            _ => {
                storage.insert(key, record);
            }
        }
    }
}

#[async_trait]
impl PriceRepository for InMemoryPriceRepository {
    async fn record(
        &self,
        station_id: &StationId,
        fuel_type: FuelType,
        price: Price,
    ) -> RepositoryResult<PriceRecord> {
        let record = PriceRecord::new(station_id.clone(), fuel_type, price, Timestamp::now());
        self.upsert_if_newer(record.clone()).await;
        Ok(record)
    }

    async fn latest(
        &self,
        station_id: &StationId,
        fuel_type: FuelType,
    ) -> RepositoryResult<Option<PriceRecord>> {
        let storage = self.storage.read().await;
        Ok(storage.get(&(station_id.clone(), fuel_type)).cloned())
    }
}
