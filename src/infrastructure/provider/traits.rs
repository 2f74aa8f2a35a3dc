//! # Provider Port
//!
//! Trait abstracting the external place-search provider.
//!
//! The aggregation service depends on this port, not on any concrete
//! provider, so tests can substitute a mock and another provider can be
//! adapted without touching the application layer.

use crate::domain::entities::Station;
use crate::domain::value_objects::Coordinate;
use crate::infrastructure::provider::error::ProviderResult;
use async_trait::async_trait;
use std::fmt;

/// Port for searching fuel stations near a coordinate.
#[async_trait]
pub trait PlaceSearchProvider: Send + Sync + fmt::Debug {
    /// Searches for fuel stations within `radius_meters` of `origin`.
    ///
    /// Returns normalized stations with the distance from `origin` already
    /// computed. An empty result is a success, not an error. The call must
    /// not mutate any shared state.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Unavailable` on network or timeout failures
    /// and `ProviderError::Rejected` on a well-formed provider error
    /// response.
    async fn search(&self, origin: Coordinate, radius_meters: f64) -> ProviderResult<Vec<Station>>;
}
