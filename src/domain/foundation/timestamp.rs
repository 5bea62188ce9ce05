//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Short calendar form used on decision cards, e.g. "Jan 28, 2025".
    pub fn display_date(&self) -> String {
        self.0.format("%b %-d, %Y").to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let ts: Timestamp = serde_json::from_str("\"2025-01-28T10:00:00Z\"").unwrap();
        assert_eq!(ts.as_datetime().year(), 2025);
    }

    #[test]
    fn display_date_uses_short_month() {
        let ts: Timestamp = serde_json::from_str("\"2025-01-08T12:00:00Z\"").unwrap();
        assert_eq!(ts.display_date(), "Jan 8, 2025");
    }

    #[test]
    fn is_after_compares_instants() {
        let early: Timestamp = serde_json::from_str("\"2025-01-28T10:00:00Z\"").unwrap();
        let late: Timestamp = serde_json::from_str("\"2025-01-28T12:00:00Z\"").unwrap();
        assert!(late.is_after(&early));
        assert!(!early.is_after(&late));
    }
}
