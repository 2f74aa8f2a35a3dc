//! # Identifier Types
//!
//! String-based identifier newtypes.
//!
//! - [`StationId`]: opaque station identifier assigned by the place-search
//!   provider, unique within that provider.
//! - [`CallerId`]: stable per-client token used to key rate-limit state,
//!   derived from the transport layer (forwarded-for header or peer address).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque station identifier assigned by the place-search provider.
///
/// The service never generates these itself; they arrive either from the
/// provider's search results or from price submissions referencing a
/// previously returned station.
///
/// # Examples
///
/// ```
/// use fuelspot::domain::value_objects::StationId;
///
/// let id = StationId::new("ChIJN1t_tDeuEmsRUsoyG83frY4");
/// assert_eq!(id.as_str(), "ChIJN1t_tDeuEmsRUsoyG83frY4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Maximum accepted identifier length in characters.
    pub const MAX_LENGTH: usize = 200;

    /// Creates a new station identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is non-empty and within the length bound.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty() && self.0.chars().count() <= Self::MAX_LENGTH
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StationId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Stable per-client token used to key rate-limit state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(String);

impl CallerId {
    /// Creates a new caller identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CallerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
