//! # API Layer
//!
//! External interfaces of the service. Currently REST only.

pub mod rest;
