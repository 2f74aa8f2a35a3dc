//! # Fuel Type
//!
//! Enumeration of the fuel grades a price can be submitted for.
//!
//! Submissions and searches both carry a fuel type; free-form strings are
//! parsed at the boundary so only these four variants ever reach the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fuel grade sold at a station.
///
/// # Examples
///
/// ```
/// use fuelspot::domain::value_objects::FuelType;
///
/// let fuel: FuelType = "diesel".parse().unwrap();
/// assert_eq!(fuel, FuelType::Diesel);
/// assert_eq!(fuel.to_string(), "diesel");
/// assert!("jet-a1".parse::<FuelType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum FuelType {
    /// Regular unleaded.
    Regular = 0,
    /// Midgrade unleaded.
    Midgrade = 1,
    /// Premium unleaded.
    Premium = 2,
    /// Diesel.
    Diesel = 3,
}

impl FuelType {
    /// All fuel types, in display order.
    pub const ALL: [Self; 4] = [Self::Regular, Self::Midgrade, Self::Premium, Self::Diesel];

    /// Returns the lowercase name used on the wire.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Midgrade => "midgrade",
            Self::Premium => "premium",
            Self::Diesel => "diesel",
        }
    }
}

impl Default for FuelType {
    fn default() -> Self {
        Self::Regular
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string does not name a known fuel type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fuel type: {0}")]
pub struct ParseFuelTypeError(pub String);

impl FromStr for FuelType {
    type Err = ParseFuelTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "midgrade" => Ok(Self::Midgrade),
            "premium" => Ok(Self::Premium),
            "diesel" => Ok(Self::Diesel),
            other => Err(ParseFuelTypeError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_variants() {
        for fuel in FuelType::ALL {
            assert_eq!(fuel.as_str().parse::<FuelType>().unwrap(), fuel);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("PREMIUM".parse::<FuelType>().unwrap(), FuelType::Premium);
        assert_eq!("Diesel".parse::<FuelType>().unwrap(), FuelType::Diesel);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "kerosene".parse::<FuelType>().unwrap_err();
        assert!(err.to_string().contains("kerosene"));
    }

    #[test]
    fn default_is_regular() {
        assert_eq!(FuelType::default(), FuelType::Regular);
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&FuelType::Midgrade).unwrap();
        assert_eq!(json, "\"midgrade\"");
        let back: FuelType = serde_json::from_str("\"diesel\"").unwrap();
        assert_eq!(back, FuelType::Diesel);
    }
}
