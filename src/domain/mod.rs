//! # Domain Layer
//!
//! Entities and value objects for the station aggregation and
//! community-pricing domain. This layer has no I/O and no dependencies on
//! the application or infrastructure layers.

pub mod entities;
pub mod value_objects;
