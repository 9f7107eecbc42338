//! Posting-date helpers.
//!
//! Posting dates are stored as plain ISO calendar-date strings (`YYYY-MM-DD`).
//! Legacy data may carry values that do not parse; those records are treated
//! as never stale rather than failing the operation.

use chrono::{DateTime, NaiveDate, Utc};

/// Seconds in a day, used for the wall-clock staleness threshold.
const SECS_PER_DAY: i64 = 86_400;

/// Parses an ISO calendar date (`YYYY-MM-DD`). Returns `None` on any
/// malformed input.
pub fn parse_posted_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Formats a timestamp as the ISO calendar date used for `datePosted`.
pub fn to_iso_date(now: DateTime<Utc>) -> String {
    now.date_naive().format("%Y-%m-%d").to_string()
}

/// Wall-clock staleness predicate: true when `date_posted` lies more than
/// `threshold_days * 86400` seconds before `now`. Unparsable dates are
/// never stale.
pub fn is_stale(date_posted: &str, now: DateTime<Utc>, threshold_days: u32) -> bool {
    let Some(date) = parse_posted_date(date_posted) else {
        return false;
    };
    let Some(posted) = date.and_hms_opt(0, 0, 0) else {
        return false;
    };
    let age_secs = now.naive_utc().signed_duration_since(posted).num_seconds();
    age_secs > i64::from(threshold_days) * SECS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(date: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(&format!("{date} 12:00:00"), "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_parse_posted_date_valid() {
        assert_eq!(
            parse_posted_date("2025-01-15"),
            NaiveDate::from_ymd_opt(2025, 1, 15)
        );
    }

    #[test]
    fn test_parse_posted_date_trims_whitespace() {
        assert!(parse_posted_date(" 2025-01-15 ").is_some());
    }

    #[test]
    fn test_parse_posted_date_invalid() {
        assert!(parse_posted_date("not-a-date").is_none());
        assert!(parse_posted_date("2025-13-40").is_none());
        assert!(parse_posted_date("").is_none());
    }

    #[test]
    fn test_to_iso_date() {
        assert_eq!(to_iso_date(at("2025-03-07")), "2025-03-07");
    }

    #[test]
    fn test_is_stale_old_record() {
        // 20 days old, 14-day threshold
        assert!(is_stale("2025-01-01", at("2025-01-21"), 14));
    }

    #[test]
    fn test_is_stale_fresh_record() {
        assert!(!is_stale("2025-01-20", at("2025-01-21"), 14));
    }

    #[test]
    fn test_is_stale_boundary_is_wall_clock_not_calendar() {
        // Exactly 14 days plus 12 hours past midnight of the posting date
        // exceeds the wall-clock threshold.
        assert!(is_stale("2025-01-01", at("2025-01-15"), 14));
        // At midnight 14 days later the age is exactly the threshold, not over.
        let exactly = NaiveDateTime::parse_from_str("2025-01-15 00:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc();
        assert!(!is_stale("2025-01-01", exactly, 14));
    }

    #[test]
    fn test_is_stale_unparsable_date_never_stale() {
        assert!(!is_stale("soon", at("2025-01-21"), 14));
        assert!(!is_stale("", at("2025-01-21"), 14));
    }
}
