//! # Infrastructure Layer
//!
//! Adapters for external systems: the place-search provider gateway and
//! the price store.

pub mod persistence;
pub mod provider;
