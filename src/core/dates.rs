//! Calendar-date parsing and day arithmetic.
//!
//! Extracted invoice data carries dates as strings. All computations work on
//! [`NaiveDate`], so time-of-day never leaks into a day count.

use chrono::{DateTime, NaiveDate, Utc};

use super::error::{MahnError, Result};

/// Parse a calendar date.
///
/// Accepted forms:
/// - `2024-06-15` (ISO 8601 date)
/// - `15.06.2024` (German notation)
/// - `2024-06-15T22:30:00+02:00` (RFC 3339; the date is taken in UTC)
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return Err(MahnError::InvalidInput("date must not be empty".into()));
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%d.%m.%Y") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }

    Err(MahnError::InvalidInput(format!("unparseable date '{s}'")))
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_date() {
        assert_eq!(parse_date("2024-06-15").unwrap(), date(2024, 6, 15));
    }

    #[test]
    fn german_date() {
        assert_eq!(parse_date("15.06.2024").unwrap(), date(2024, 6, 15));
        assert_eq!(parse_date(" 01.02.2024 ").unwrap(), date(2024, 2, 1));
    }

    #[test]
    fn rfc3339_truncated_in_utc() {
        assert_eq!(
            parse_date("2024-06-15T22:30:00+02:00").unwrap(),
            date(2024, 6, 15)
        );
        // 00:30 in Berlin is still the previous day in UTC
        assert_eq!(
            parse_date("2024-06-16T00:30:00+02:00").unwrap(),
            date(2024, 6, 15)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_date("not a date"),
            Err(MahnError::InvalidInput(_))
        ));
        assert!(parse_date("").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("31.13.2024").is_err());
    }

    #[test]
    fn day_difference() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 11)), 10);
        assert_eq!(days_between(date(2024, 1, 11), date(2024, 1, 1)), -10);
        assert_eq!(days_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
    }
}
