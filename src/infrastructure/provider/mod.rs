//! # Provider Gateway
//!
//! Adapter for the external geospatial place-search provider.
//!
//! - [`traits::PlaceSearchProvider`]: the port the aggregator depends on
//! - [`google_places::GooglePlacesProvider`]: Google Places adapter
//! - [`http_client::HttpClient`]: shared reqwest wrapper
//! - [`error::ProviderError`]: typed provider failures

pub mod error;
pub mod google_places;
pub mod http_client;
pub mod traits;

pub use error::{ProviderError, ProviderResult};
pub use google_places::GooglePlacesProvider;
pub use traits::PlaceSearchProvider;
