//! # Station Entity
//!
//! A fuel-retail point of interest returned by the place-search provider.
//!
//! Stations are transient: they are normalized from provider results per
//! request and never persisted, so location data is always as fresh as the
//! provider's answer.

use crate::domain::value_objects::{Coordinate, StationId};
use serde::{Deserialize, Serialize};

/// A fuel station as normalized from a provider search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Provider-assigned identifier, unique within the provider.
    pub id: StationId,
    /// Display name.
    pub name: String,
    /// Street address or vicinity description.
    pub address: String,
    /// Geographic location.
    pub location: Coordinate,
    /// Distance from the query origin, in meters.
    pub distance_meters: f64,
    /// Provider-defined quality rating, when reported.
    pub rating: Option<f64>,
    /// Whether the station is currently open, when the provider knows.
    pub open_now: Option<bool>,
}

impl Station {
    /// Creates a station with the required fields; optional provider data
    /// defaults to absent.
    #[must_use]
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        address: impl Into<String>,
        location: Coordinate,
        distance_meters: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            location,
            distance_meters,
            rating: None,
            open_now: None,
        }
    }

    /// Sets the provider quality rating.
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Sets the open-now flag.
    #[must_use]
    pub fn with_open_now(mut self, open_now: bool) -> Self {
        self.open_now = Some(open_now);
        self
    }
}
