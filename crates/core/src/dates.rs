//! Date parsing for chronological ordering and partial-date detection.
//!
//! Portfolio dates arrive as loosely formatted strings: full dates,
//! timestamps, or partial `YYYY` / `YYYY-MM` values from AI extraction.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

/// Sentinel the extractor writes when it could not find any date.
pub const PLACEHOLDER_DATE: &str = "9999-01-01";

/// Year only, e.g. `2020`.
pub static YEAR_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("valid regex"));

/// Year and month only, e.g. `2020-05`.
pub static YEAR_MONTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("valid regex"));

/// Parse a date string into UTC milliseconds since the epoch.
///
/// Accepts RFC 3339 timestamps, zone-less `YYYY-MM-DDTHH:MM:SS[.fff]`
/// (read as UTC), `YYYY-MM-DD`, `YYYY-MM` (first of the month) and `YYYY`
/// (January 1st). Returns `None` for anything else.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc().timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return midnight_millis(date);
    }
    if YEAR_MONTH_RE.is_match(raw) {
        let date = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok()?;
        return midnight_millis(date);
    }
    if YEAR_ONLY_RE.is_match(raw) {
        let year: i32 = raw.parse().ok()?;
        return midnight_millis(NaiveDate::from_ymd_opt(year, 1, 1)?);
    }

    None
}

/// Sort key for chronological ordering. Missing or unparseable dates are
/// epoch zero.
pub fn sort_timestamp(raw: Option<&str>) -> i64 {
    raw.and_then(parse_timestamp).unwrap_or(0)
}

fn midnight_millis(date: NaiveDate) -> Option<i64> {
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    #[test]
    fn full_date_is_midnight_utc() {
        assert_eq!(parse_timestamp("1970-01-02"), Some(DAY_MS));
    }

    #[test]
    fn rfc3339_respects_offset() {
        assert_eq!(parse_timestamp("1970-01-01T09:00:00+09:00"), Some(0));
    }

    #[test]
    fn zoneless_timestamp_is_utc() {
        assert_eq!(parse_timestamp("1970-01-01T00:00:01"), Some(1000));
        assert_eq!(parse_timestamp("1970-01-01T00:00:01.500"), Some(1500));
    }

    #[test]
    fn partial_dates_resolve_to_period_start() {
        assert_eq!(parse_timestamp("2020-05"), parse_timestamp("2020-05-01"));
        assert_eq!(parse_timestamp("2020"), parse_timestamp("2020-01-01"));
    }

    #[test]
    fn placeholder_is_a_real_date() {
        let placeholder = parse_timestamp(PLACEHOLDER_DATE).unwrap();
        assert!(placeholder > parse_timestamp("2999-12-31").unwrap());
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("2020-05-1x"), None);
        assert_eq!(parse_timestamp("2020-13"), None);
        assert_eq!(parse_timestamp("last summer"), None);
    }

    #[test]
    fn sort_timestamp_defaults_to_epoch() {
        assert_eq!(sort_timestamp(None), 0);
        assert_eq!(sort_timestamp(Some("n/a")), 0);
        assert_eq!(sort_timestamp(Some("1970-01-02")), DAY_MS);
    }

    #[test]
    fn partial_date_patterns() {
        assert!(YEAR_ONLY_RE.is_match("2020"));
        assert!(!YEAR_ONLY_RE.is_match("20201"));
        assert!(YEAR_MONTH_RE.is_match("2020-05"));
        assert!(!YEAR_MONTH_RE.is_match("2020-05-01"));
    }
}
