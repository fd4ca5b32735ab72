//! Generic protobuf ↔ domain conversions
//!
//! Timestamps travel as `int64` Unix seconds on the wire.

use chrono::{DateTime, Utc};

/// Convert `DateTime<Utc>` to Unix seconds
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> i64 {
  dt.timestamp()
}

/// Convert Unix seconds to `DateTime<Utc>`.
///
/// Returns `None` for a zero (unset) or out-of-range timestamp.
pub fn timestamp_to_datetime(timestamp: i64) -> Option<DateTime<Utc>> {
  if timestamp == 0 {
    return None;
  }
  DateTime::from_timestamp(timestamp, 0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_timestamp_keeps_seconds() {
    let now = Utc::now();
    let back = timestamp_to_datetime(datetime_to_timestamp(now)).unwrap();
    assert_eq!(now.timestamp(), back.timestamp());
  }

  #[test]
  fn test_zero_timestamp_is_unset() {
    assert!(timestamp_to_datetime(0).is_none());
  }

  #[test]
  fn test_out_of_range_timestamp() {
    assert!(timestamp_to_datetime(i64::MAX).is_none());
  }
}
