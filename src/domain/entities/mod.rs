//! # Domain Entities
//!
//! - [`Station`]: transient point of interest from the provider
//! - [`PriceRecord`]: persisted, immutable community price submission
//! - [`AggregatedStation`]: station joined with its current display price

pub mod aggregated_station;
pub mod price_record;
pub mod station;

pub use aggregated_station::{AggregatedStation, NO_PRICE_DATA};
pub use price_record::PriceRecord;
pub use station::Station;
