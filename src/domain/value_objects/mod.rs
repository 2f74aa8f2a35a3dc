//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`StationId`]: provider-assigned station identifier
//! - [`CallerId`]: rate-limit key derived from the transport layer
//!
//! ## Domain Types
//!
//! - [`FuelType`]: the four supported fuel grades
//! - [`Price`]: decimal price with submission bounds
//! - [`Coordinate`]: validated latitude/longitude pair
//! - [`Timestamp`]: service-assigned UTC timestamp

pub mod coordinate;
pub mod fuel_type;
pub mod ids;
pub mod price;
pub mod timestamp;

pub use coordinate::Coordinate;
pub use fuel_type::{FuelType, ParseFuelTypeError};
pub use ids::{CallerId, StationId};
pub use price::Price;
pub use timestamp::Timestamp;
