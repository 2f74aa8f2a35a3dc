//! # Application Layer
//!
//! Use-case orchestration over the domain and infrastructure layers: the
//! station aggregator, the submission guard and their shared error
//! taxonomy.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
