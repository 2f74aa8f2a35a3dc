//! # Aggregated Station
//!
//! A station joined with its current community price for one fuel type.
//!
//! The display price is always present: either the formatted latest record
//! or the literal [`NO_PRICE_DATA`] sentinel, so consumers have exactly one
//! shape to handle.

use crate::domain::entities::price_record::PriceRecord;
use crate::domain::entities::station::Station;
use serde::{Deserialize, Serialize};

/// Display value emitted when no price record exists for the requested
/// station and fuel type.
pub const NO_PRICE_DATA: &str = "No price data";

/// A station with its display-ready community price data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedStation {
    /// The underlying station from the provider.
    pub station: Station,
    /// Formatted current price, or [`NO_PRICE_DATA`].
    pub display_price: String,
    /// True when the current price was submitted within the freshness
    /// window. Always false when there is no price.
    pub fresh: bool,
}

impl AggregatedStation {
    /// Builds an aggregated station from the current price record.
    #[must_use]
    pub fn priced(station: Station, record: &PriceRecord, fresh: bool) -> Self {
        Self {
            station,
            display_price: record.price.display(),
            fresh,
        }
    }

    /// Builds an aggregated station carrying the no-data sentinel.
    #[must_use]
    pub fn without_price(station: Station) -> Self {
        Self {
            station,
            display_price: NO_PRICE_DATA.to_string(),
            fresh: false,
        }
    }

    /// Returns true if a community price is present.
    #[must_use]
    pub fn has_price(&self) -> bool {
        self.display_price != NO_PRICE_DATA
    }
}
