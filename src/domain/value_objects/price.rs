//! # Price Value Object
//!
//! Decimal price with submission bounds and display formatting.
//!
//! Prices are community-submitted currency amounts per unit of fuel. The
//! accepted submission range is `1.00..=10.00` in the provider's currency
//! unit; the bound is enforced before persistence, never after.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A positive decimal fuel price, normalized to two decimal places.
///
/// # Examples
///
/// ```
/// use fuelspot::domain::value_objects::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(345, 2)).unwrap();
/// assert_eq!(price.display(), "$3.45");
/// assert!(price.is_within_submission_bounds());
///
/// let cheap = Price::new(Decimal::new(50, 2)).unwrap();
/// assert!(!cheap.is_within_submission_bounds());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from a decimal value.
    ///
    /// Returns `None` for zero or negative values. The value is rounded to
    /// two decimal places (banker's rounding).
    #[must_use]
    pub fn new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value.round_dp(2)))
        } else {
            None
        }
    }

    /// Creates a price accepted for community submission.
    ///
    /// The bounds are checked against the raw value before rounding, so a
    /// value like `0.995` cannot round into range.
    #[must_use]
    pub fn submittable(value: Decimal) -> Option<Self> {
        if value >= Self::min_submittable() && value <= Self::max_submittable() {
            Self::new(value)
        } else {
            None
        }
    }

    /// Lowest price accepted for community submissions (inclusive).
    #[must_use]
    pub fn min_submittable() -> Decimal {
        Decimal::new(100, 2)
    }

    /// Highest price accepted for community submissions (inclusive).
    #[must_use]
    pub fn max_submittable() -> Decimal {
        Decimal::new(1000, 2)
    }

    /// Returns the underlying decimal value.
    #[inline]
    #[must_use]
    pub fn get(self) -> Decimal {
        self.0
    }

    /// Returns true if the price lies within the accepted submission range.
    #[must_use]
    pub fn is_within_submission_bounds(self) -> bool {
        self.0 >= Self::min_submittable() && self.0 <= Self::max_submittable()
    }

    /// Formats the price for display, e.g. `"$3.45"`.
    #[must_use]
    pub fn display(self) -> String {
        format!("${:.2}", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
