//! # Provider Errors
//!
//! Error types for the external place-search provider.
//!
//! # Examples
//!
//! ```
//! use fuelspot::infrastructure::provider::error::ProviderError;
//!
//! let error = ProviderError::unavailable("request timed out after 10000ms");
//! assert!(error.is_retryable());
//!
//! let error = ProviderError::rejected("REQUEST_DENIED: invalid API key");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for place-search provider operations.
///
/// Distinguishes transient transport failures from well-formed provider
/// rejections so the service boundary can map them to different responses.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Network failure or timeout reaching the provider.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error message.
        message: String,
    },

    /// Well-formed error response from the provider, e.g. invalid key or
    /// quota exceeded.
    #[error("provider rejected request: {message}")]
    Rejected {
        /// Error message.
        message: String,
    },

    /// Response payload that could not be decoded.
    #[error("provider response malformed: {message}")]
    Malformed {
        /// Error message.
        message: String,
    },
}

impl ProviderError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a rejected error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates a malformed-response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Returns true if a retry of the same request could succeed.
    ///
    /// The service itself never retries; the client may.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
