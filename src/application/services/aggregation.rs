//! # Station Aggregator
//!
//! Orchestrates a station search: one provider call, then a price lookup
//! per returned station, merged into display-ready records.
//!
//! A provider failure fails the whole aggregation since there is nothing
//! to aggregate without stations. A failed lookup for a single station
//! degrades that station to the no-data sentinel instead of failing the
//! batch, because price data is supplementary.

use crate::application::error::ApplicationResult;
use crate::domain::entities::{AggregatedStation, Station};
use crate::domain::value_objects::{Coordinate, FuelType};
use crate::infrastructure::persistence::PriceRepository;
use crate::infrastructure::provider::PlaceSearchProvider;
use futures::future::join_all;
use std::sync::Arc;

/// Configuration for station aggregation.
#[derive(Debug, Clone, Copy)]
pub struct AggregatorConfig {
    /// Age in seconds below which a price is flagged as fresh.
    pub freshness_window_secs: u64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            freshness_window_secs: 86_400,
        }
    }
}

impl AggregatorConfig {
    /// Sets the freshness window.
    #[must_use]
    pub fn with_freshness_window_secs(mut self, secs: u64) -> Self {
        self.freshness_window_secs = secs;
        self
    }
}

/// Combines provider search results with stored community prices.
#[derive(Debug)]
pub struct StationAggregator {
    provider: Arc<dyn PlaceSearchProvider>,
    repository: Arc<dyn PriceRepository>,
    config: AggregatorConfig,
}

impl StationAggregator {
    /// Creates a new aggregator.
    #[must_use]
    pub fn new(
        provider: Arc<dyn PlaceSearchProvider>,
        repository: Arc<dyn PriceRepository>,
        config: AggregatorConfig,
    ) -> Self {
        Self {
            provider,
            repository,
            config,
        }
    }

    /// Searches for stations near `origin` and joins each with its current
    /// community price for `fuel_type`.
    ///
    /// No ordering is imposed on the result; the raw per-station distance
    /// is included so the client can order or filter.
    ///
    /// # Errors
    ///
    /// Propagates provider failures; per-station store lookup failures are
    /// degraded to the sentinel instead.
    pub async fn aggregate(
        &self,
        origin: Coordinate,
        radius_meters: f64,
        fuel_type: FuelType,
    ) -> ApplicationResult<Vec<AggregatedStation>> {
        let stations = self.provider.search(origin, radius_meters).await?;
        tracing::debug!(
            count = stations.len(),
            %fuel_type,
            "provider returned stations"
        );

        let lookups = stations
            .into_iter()
            .map(|station| self.join_with_price(station, fuel_type));

        Ok(join_all(lookups).await)
    }

    /// Looks up the current price for one station, degrading to the
    /// sentinel on a store fault.
    async fn join_with_price(&self, station: Station, fuel_type: FuelType) -> AggregatedStation {
        match self.repository.latest(&station.id, fuel_type).await {
            Ok(Some(record)) => {
                let fresh = record.is_fresh(self.config.freshness_window_secs);
                AggregatedStation::priced(station, &record, fresh)
            }
            Ok(None) => AggregatedStation::without_price(station),
            Err(error) => {
                tracing::warn!(
                    station = %station.id,
                    %fuel_type,
                    %error,
                    "price lookup failed, degrading station to no-data"
                );
                AggregatedStation::without_price(station)
            }
        }
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub fn config(&self) -> AggregatorConfig {
        self.config
    }
}
