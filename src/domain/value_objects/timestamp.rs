//! # Timestamp Value Object
//!
//! UTC timestamp wrapper used for service-assigned submission times.
//!
//! Submission timestamps are always assigned by the service, never taken
//! from the client, so record freshness cannot be manipulated by clock
//! skew on the submitting device.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp.
///
/// # Examples
///
/// ```
/// use fuelspot::domain::value_objects::Timestamp;
///
/// let now = Timestamp::now();
/// let earlier = now.sub_secs(3600);
/// assert!(earlier < now);
/// assert!(earlier.age_seconds() >= 3600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wraps an existing chrono datetime.
    #[must_use]
    pub const fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Returns the wrapped chrono datetime.
    #[inline]
    #[must_use]
    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Returns a timestamp `secs` seconds later. Saturates on overflow.
    #[must_use]
    pub fn add_secs(self, secs: i64) -> Self {
        self.0
            .checked_add_signed(Duration::seconds(secs))
            .map_or(self, Self)
    }

    /// Returns a timestamp `secs` seconds earlier. Saturates on overflow.
    #[must_use]
    pub fn sub_secs(self, secs: i64) -> Self {
        self.0
            .checked_sub_signed(Duration::seconds(secs))
            .map_or(self, Self)
    }

    /// Returns the age of this timestamp relative to now, in whole seconds.
    ///
    /// Negative for timestamps in the future.
    #[must_use]
    pub fn age_seconds(&self) -> i64 {
        (Utc::now() - self.0).num_seconds()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_time() {
        let now = Timestamp::now();
        assert!(now.sub_secs(1) < now);
        assert!(now.add_secs(1) > now);
    }

    #[test]
    fn age_of_past_timestamp_is_positive() {
        let old = Timestamp::now().sub_secs(120);
        assert!(old.age_seconds() >= 120);
    }

    #[test]
    fn age_of_future_timestamp_is_negative() {
        let future = Timestamp::now().add_secs(120);
        assert!(future.age_seconds() < 0);
    }

    #[test]
    fn add_and_sub_round_trip() {
        let now = Timestamp::now();
        assert_eq!(now.add_secs(60).sub_secs(60), now);
    }
}
