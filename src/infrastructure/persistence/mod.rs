//! # Price Store
//!
//! Durable storage of community price submissions.
//!
//! - [`traits::PriceRepository`]: the port the application layer depends on
//! - [`in_memory::InMemoryPriceRepository`]: latest-wins in-memory backend

pub mod in_memory;
pub mod traits;

pub use in_memory::InMemoryPriceRepository;
pub use traits::{PriceRepository, RepositoryError, RepositoryResult};
