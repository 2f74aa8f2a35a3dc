//! # Application Services
//!
//! - [`aggregation::StationAggregator`]: joins provider search results
//!   with stored community prices
//! - [`submission::SubmissionGuard`]: validation and rate limiting in
//!   front of the price store
//! - [`rate_limit::SlidingWindowRateLimiter`]: per-caller attempt counter

pub mod aggregation;
pub mod rate_limit;
pub mod submission;

pub use aggregation::{AggregatorConfig, StationAggregator};
pub use rate_limit::{RateLimitConfig, SlidingWindowRateLimiter};
pub use submission::SubmissionGuard;
