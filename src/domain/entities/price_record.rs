//! # Price Record Entity
//!
//! An immutable, timestamped community-submitted price.

use crate::domain::value_objects::{FuelType, Price, StationId, Timestamp};
use serde::{Deserialize, Serialize};

/// A community-submitted price for one station and fuel type.
///
/// Records are created once and never mutated. The submission timestamp is
/// assigned by the service, and the record with the maximum timestamp is
/// the current price for its (station, fuel type) key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Station the price was observed at.
    pub station_id: StationId,
    /// Fuel grade the price applies to.
    pub fuel_type: FuelType,
    /// The submitted price.
    pub price: Price,
    /// Service-assigned submission time.
    pub submitted_at: Timestamp,
}

impl PriceRecord {
    /// Creates a new price record.
    #[must_use]
    pub fn new(
        station_id: StationId,
        fuel_type: FuelType,
        price: Price,
        submitted_at: Timestamp,
    ) -> Self {
        Self {
            station_id,
            fuel_type,
            price,
            submitted_at,
        }
    }

    /// Returns true if the record was submitted within the last
    /// `window_secs` seconds.
    #[must_use]
    pub fn is_fresh(&self, window_secs: u64) -> bool {
        let age = self.submitted_at.age_seconds();
        age >= 0 && (age as u64) < window_secs
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn record_aged(secs: i64) -> PriceRecord {
        PriceRecord::new(
            StationId::new("s1"),
            FuelType::Regular,
            Price::new(Decimal::new(345, 2)).unwrap(),
            Timestamp::now().sub_secs(secs),
        )
    }

    #[test]
    fn recent_record_is_fresh() {
        assert!(record_aged(60).is_fresh(86_400));
    }

    #[test]
    fn old_record_is_stale() {
        assert!(!record_aged(86_401).is_fresh(86_400));
    }

    #[test]
    fn future_record_is_not_fresh() {
        // A negative age means a skewed clock; treat it as not fresh rather
        // than trusting it.
        let record = record_aged(-120);
        assert!(!record.is_fresh(86_400));
    }
}
