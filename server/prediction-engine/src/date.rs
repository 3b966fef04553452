//! Date parsing and day arithmetic.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a timestamp into UTC.
///
/// Accepts RFC3339, a naive ISO8601 date-time (taken as UTC), or a bare date
/// (midnight UTC).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
  let s = s.trim();
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Some(dt.with_timezone(&Utc));
  }
  if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
    return Some(naive.and_utc());
  }
  let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
  Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Whole days elapsed from `since` to `now`, rounded down (negative for future dates).
pub fn days_between(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
  (now - since).num_seconds().div_euclid(86_400)
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  #[test]
  fn parses_supported_formats() {
    let expected = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
    assert_eq!(parse_timestamp("2024-03-01T08:30:00Z"), Some(expected));
    assert_eq!(parse_timestamp("2024-03-01T10:30:00+02:00"), Some(expected));
    assert_eq!(parse_timestamp("2024-03-01T08:30:00"), Some(expected));
    assert_eq!(parse_timestamp("2024-03-01T08:30:00.000000"), Some(expected));
    assert_eq!(
      parse_timestamp("2024-03-01"),
      Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(parse_timestamp("yesterday"), None);
  }

  #[test]
  fn days_between_floors() {
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
    let since = Utc.with_ymd_and_hms(2025, 1, 5, 18, 0, 0).unwrap();
    assert_eq!(days_between(since, now), 9);
    let future = Utc.with_ymd_and_hms(2025, 1, 15, 13, 0, 0).unwrap();
    assert_eq!(days_between(future, now), -1);
  }
}
