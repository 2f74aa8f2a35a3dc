//! # fuelspot
//!
//! Station aggregation and community-pricing service.
//!
//! The service answers two operations for a mobile client:
//!
//! - **Search**: query an external place-search provider for fuel stations
//!   near a coordinate and join each with the latest community-submitted
//!   price for a fuel type, including a freshness indicator.
//! - **Submit price**: validate and rate-limit an anonymous price
//!   submission, then persist it with a service-assigned timestamp.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! ```text
//! api            REST boundary (axum handlers, wire contract)
//! application    use cases: aggregation, submission guard, rate limiting
//! domain         entities and value objects, no I/O
//! infrastructure provider gateway (Google Places) and price store
//! ```
//!
//! Presentation concerns of the consuming client (sorting, unit
//! conversion, text filtering, map rendering) are deliberately absent:
//! the search output carries raw per-station distance so the client can
//! implement them on its side.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
