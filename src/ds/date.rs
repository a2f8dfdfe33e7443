//! Instant leaf values.
//!
//! A `DateData` carries a single UTC instant. The clone engine always
//! produces a fresh copy of it, never a shared one.

use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, SecondsFormat, Utc};

pub struct DateData {
    instant: DateTime<Utc>,
}

impl DateData {
    pub fn new(instant: DateTime<Utc>) -> Self {
        DateData { instant }
    }

    /// The current instant.
    pub fn now() -> Self {
        DateData {
            instant: Utc::now(),
        }
    }

    /// Build from milliseconds since the Unix epoch. Returns `None` when the
    /// value is outside chrono's representable range.
    pub fn from_timestamp_millis(millis: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis).map(|instant| DateData { instant })
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }
}

impl Clone for DateData {
    fn clone(&self) -> Self {
        DateData {
            instant: self.instant,
        }
    }
}

impl PartialEq for DateData {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Display for DateData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.instant.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}

impl fmt::Debug for DateData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "DateData({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_timestamp_millis() {
        let d = DateData::from_timestamp_millis(1_500_000_000_000).unwrap();
        assert_eq!(d.timestamp_millis(), 1_500_000_000_000);
    }

    #[test]
    fn test_clone_is_equal() {
        let d = DateData::from_timestamp_millis(42).unwrap();
        let d2 = d.clone();
        assert_eq!(d, d2);
    }

    #[test]
    fn test_now_leaf_survives_clone_with_equal_instant() {
        use crate::ds::operations::clone::clone_value;
        use crate::ds::value::Value;

        let d = DateData::now();
        assert!(d.timestamp_millis() > 0);
        match clone_value(&Value::Date(d.clone())) {
            Value::Date(copied) => assert_eq!(copied, d),
            other => panic!("expected a date, got {:?}", other),
        }
    }
}
