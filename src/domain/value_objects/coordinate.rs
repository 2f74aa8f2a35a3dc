//! # Coordinate Value Object
//!
//! Validated WGS84 latitude/longitude pair with great-circle distance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius in meters, used by the haversine formula.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A validated geographic coordinate.
///
/// # Invariants
///
/// - Latitude in `-90.0..=90.0`
/// - Longitude in `-180.0..=180.0`
///
/// # Examples
///
/// ```
/// use fuelspot::domain::value_objects::Coordinate;
///
/// let origin = Coordinate::new(37.7749, -122.4194).unwrap();
/// assert!(Coordinate::new(91.0, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, returning `None` when out of range.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }

    /// Returns the latitude in degrees.
    #[inline]
    #[must_use]
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    #[inline]
    #[must_use]
    pub fn longitude(self) -> f64 {
        self.longitude
    }

    /// Computes the haversine distance to another coordinate, in meters.
    ///
    /// Accurate to within ~0.5% for the distances involved in a station
    /// search; sufficient for display and client-side sorting.
    #[must_use]
    pub fn distance_meters(self, other: Self) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}
