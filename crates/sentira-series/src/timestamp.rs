//! Epoch-millisecond timestamps
//!
//! Provides [`Timestamp`], the instant type carried by every data point.
//! Values compare as opaque ordinals; calendar interpretation is left to
//! the rendering layer.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Milliseconds since the Unix epoch
///
/// Immutable and cheap to clone (Copy). Ordering follows the raw
/// millisecond value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a timestamp from epoch milliseconds
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Raw epoch milliseconds
    #[inline]
    #[must_use]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Current wall-clock instant
    #[inline]
    #[must_use]
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }

    /// Calendar form for display
    ///
    /// Returns `None` when the value falls outside chrono's representable
    /// range.
    #[inline]
    #[must_use]
    pub fn to_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.0)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_millis_roundtrip() {
        let ts = Timestamp::from_millis(1_700_000_000_000);
        assert_eq!(ts.as_millis(), 1_700_000_000_000);
    }

    #[test]
    fn timestamp_ordering_follows_millis() {
        assert!(Timestamp::from_millis(1_000) < Timestamp::from_millis(2_000));
        assert_eq!(Timestamp::from_millis(5), Timestamp::from_millis(5));
    }

    #[test]
    fn timestamp_to_datetime() {
        let dt = Timestamp::from_millis(0).to_datetime().unwrap();
        assert_eq!(dt.timestamp_millis(), 0);
    }

    #[test]
    fn timestamp_display_is_raw_millis() {
        assert_eq!(Timestamp::from_millis(42).to_string(), "42");
    }

    #[test]
    fn timestamp_serializes_as_bare_number() {
        let json = serde_json::to_string(&Timestamp::from_millis(1_000)).unwrap();
        assert_eq!(json, "1000");
    }
}
