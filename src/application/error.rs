//! # Application Errors
//!
//! Error taxonomy for the two service operations.
//!
//! Caller-fixable validation failures are surfaced verbatim; rate-limit
//! rejections carry no internal detail; infrastructure faults are surfaced
//! as generic retryable failures while full detail is logged internally.
//!
//! # Examples
//!
//! ```
//! use fuelspot::application::error::ApplicationError;
//!
//! let err = ApplicationError::invalid_price("not a number");
//! assert!(err.is_validation());
//!
//! let err = ApplicationError::RateLimitExceeded;
//! assert!(err.is_rate_limited());
//! ```

use crate::infrastructure::persistence::RepositoryError;
use crate::infrastructure::provider::ProviderError;
use thiserror::Error;

/// Error type for application-layer operations.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Station identifier is empty or oversized.
    #[error("invalid station id: {0}")]
    InvalidStationId(String),

    /// Fuel type is not one of the four enumerated values.
    #[error("invalid fuel type: {0}")]
    InvalidFuelType(String),

    /// Price could not be parsed as a positive decimal.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Price parsed but falls outside the accepted submission range.
    #[error("price out of range: {0}")]
    PriceOutOfRange(String),

    /// Caller exceeded the submission rate limit.
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    /// Place-search provider failure.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Price store failure.
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl ApplicationError {
    /// Creates an invalid station id error.
    #[must_use]
    pub fn invalid_station_id(message: impl Into<String>) -> Self {
        Self::InvalidStationId(message.into())
    }

    /// Creates an invalid fuel type error.
    #[must_use]
    pub fn invalid_fuel_type(message: impl Into<String>) -> Self {
        Self::InvalidFuelType(message.into())
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(message: impl Into<String>) -> Self {
        Self::InvalidPrice(message.into())
    }

    /// Creates a price out of range error.
    #[must_use]
    pub fn price_out_of_range(message: impl Into<String>) -> Self {
        Self::PriceOutOfRange(message.into())
    }

    /// Returns true for caller-fixable validation failures.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidStationId(_)
                | Self::InvalidFuelType(_)
                | Self::InvalidPrice(_)
                | Self::PriceOutOfRange(_)
        )
    }

    /// Returns true for rate-limit rejections.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimitExceeded)
    }

    /// Returns true for infrastructure faults the caller may retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Provider(e) => e.is_retryable(),
            Self::Store(_) => true,
            _ => false,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_classification() {
        assert!(ApplicationError::invalid_station_id("empty").is_validation());
        assert!(ApplicationError::invalid_fuel_type("jet-a1").is_validation());
        assert!(ApplicationError::invalid_price("abc").is_validation());
        assert!(ApplicationError::price_out_of_range("0.50").is_validation());
        assert!(!ApplicationError::RateLimitExceeded.is_validation());
    }

    #[test]
    fn rate_limit_classification() {
        assert!(ApplicationError::RateLimitExceeded.is_rate_limited());
        assert!(!ApplicationError::invalid_price("abc").is_rate_limited());
    }

    #[test]
    fn provider_unavailable_is_retryable() {
        let err: ApplicationError = ProviderError::unavailable("timeout").into();
        assert!(err.is_retryable());
    }

    #[test]
    fn provider_rejection_is_not_retryable() {
        let err: ApplicationError = ProviderError::rejected("bad key").into();
        assert!(!err.is_retryable());
    }

    #[test]
    fn store_fault_is_retryable() {
        let err: ApplicationError = RepositoryError::unavailable("down").into();
        assert!(err.is_retryable());
    }

    #[test]
    fn validation_errors_surface_their_message() {
        let err = ApplicationError::price_out_of_range("price must be between $1.00 and $10.00");
        assert!(err.to_string().contains("$1.00"));
    }
}
