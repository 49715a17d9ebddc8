//! Small presentation helpers: reference numbers, elapsed-time rendering,
//! and date reformatting.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Zero-date sentinel found in legacy MySQL dumps.
const ZERO_DATETIME: &str = "0000-00-00 00:00:00";
const PLACEHOLDER: &str = "--";

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Generate an uppercase hex reference number of the given length, seeded
/// from a fresh UUID. The prefix participates in the hash but does not
/// appear in the output.
pub fn generate_reference_number(prefix: &str, length: usize) -> String {
    let unique = format!("{prefix}{}", Uuid::new_v4());
    let digest = Sha256::digest(unique.as_bytes());
    let mut reference = hex::encode(digest).to_uppercase();
    reference.truncate(length);
    reference
}

/// Render how long ago `raw` (a `YYYY-MM-DD HH:MM:SS` timestamp) was, in
/// the largest whole unit: "2 days ago", "1 hour ago", and so on. Missing,
/// zero-date, and unparseable values render as "--".
pub fn elapsed_time(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(v) if !v.is_empty() && v != ZERO_DATETIME => v,
        _ => return PLACEHOLDER.to_string(),
    };

    match NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT) {
        Ok(then) => elapsed_since(then, Utc::now().naive_utc()),
        Err(_) => PLACEHOLDER.to_string(),
    }
}

fn elapsed_since(then: NaiveDateTime, now: NaiveDateTime) -> String {
    let delta = now.signed_duration_since(then);
    let seconds = delta.num_seconds();
    if seconds < 1 {
        return "a moment ago".to_string();
    }

    let minutes = delta.num_minutes();
    let hours = delta.num_hours();
    let days = delta.num_days();
    let months = whole_months_between(then, now);
    let years = months / 12;

    if years > 0 {
        plural(years, "year")
    } else if months > 0 {
        plural(months, "month")
    } else if days > 0 {
        plural(days, "day")
    } else if hours > 0 {
        plural(hours, "hour")
    } else if minutes > 0 {
        plural(minutes, "minute")
    } else {
        plural(seconds, "second")
    }
}

/// Whole calendar months between two instants. A month counts only once
/// the day-of-month and time of day have been reached, so 360 days is
/// still 11 months.
fn whole_months_between(then: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let mut months = (now.year() as i64 - then.year() as i64) * 12
        + (now.month() as i64 - then.month() as i64);
    if months > 0 && (now.day(), now.time()) < (then.day(), then.time()) {
        months -= 1;
    }
    months.max(0)
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Reformat a `YYYY-MM-DD` date using the chrono `format` string. Empty,
/// zero-date, and unparseable inputs render as "--".
pub fn date_from_format(input: &str, format: &str) -> String {
    if input.is_empty() || input == ZERO_DATETIME {
        return PLACEHOLDER.to_string();
    }
    match NaiveDate::parse_from_str(input, DATE_FORMAT) {
        Ok(date) => date.format(format).to_string(),
        Err(_) => PLACEHOLDER.to_string(),
    }
}

/// Reformat a `YYYY-MM-DD HH:MM:SS` timestamp using the chrono `format`
/// string. Empty, zero-date, and unparseable inputs render as "--".
pub fn datetime_from_format(input: &str, format: &str) -> String {
    if input.is_empty() || input == ZERO_DATETIME {
        return PLACEHOLDER.to_string();
    }
    match NaiveDateTime::parse_from_str(input, DATETIME_FORMAT) {
        Ok(datetime) => datetime.format(format).to_string(),
        Err(_) => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).unwrap()
    }

    #[test]
    fn test_reference_number_shape() {
        let reference = generate_reference_number("INV", 8);
        assert_eq!(reference.len(), 8);
        assert!(reference.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(reference, reference.to_uppercase());
    }

    #[test]
    fn test_reference_numbers_are_unique() {
        let a = generate_reference_number("", 16);
        let b = generate_reference_number("", 16);
        assert_ne!(a, b);
    }

    #[test]
    fn test_elapsed_missing_and_zero_dates() {
        assert_eq!(elapsed_time(None), "--");
        assert_eq!(elapsed_time(Some("")), "--");
        assert_eq!(elapsed_time(Some(ZERO_DATETIME)), "--");
        assert_eq!(elapsed_time(Some("garbage")), "--");
    }

    #[test]
    fn test_elapsed_units() {
        let now = dt("2026-08-25 12:00:00");
        assert_eq!(elapsed_since(dt("2026-08-25 12:00:00"), now), "a moment ago");
        assert_eq!(elapsed_since(dt("2026-08-25 11:59:30"), now), "30 seconds ago");
        assert_eq!(elapsed_since(dt("2026-08-25 11:59:00"), now), "1 minute ago");
        assert_eq!(elapsed_since(dt("2026-08-25 09:00:00"), now), "3 hours ago");
        assert_eq!(elapsed_since(dt("2026-08-23 12:00:00"), now), "2 days ago");
        assert_eq!(elapsed_since(dt("2026-07-10 12:00:00"), now), "1 month ago");
        assert_eq!(elapsed_since(dt("2024-08-25 12:00:00"), now), "2 years ago");
    }

    #[test]
    fn test_elapsed_units_follow_the_calendar() {
        let now = dt("2026-08-25 12:00:00");
        // 360 days back is not yet a full 12 calendar months.
        assert_eq!(elapsed_since(dt("2025-08-30 12:00:00"), now), "11 months ago");
        // One day short of the day-of-month rolls back to days.
        assert_eq!(elapsed_since(dt("2026-07-26 12:00:00"), now), "30 days ago");
        // An exact calendar year is a year even across leap February.
        assert_eq!(elapsed_since(dt("2025-08-25 12:00:00"), now), "1 year ago");
    }

    #[test]
    fn test_date_from_format() {
        assert_eq!(date_from_format("2026-08-25", "%d/%m/%Y"), "25/08/2026");
        assert_eq!(date_from_format("", "%d/%m/%Y"), "--");
        assert_eq!(date_from_format(ZERO_DATETIME, "%d/%m/%Y"), "--");
        assert_eq!(date_from_format("25-08-2026", "%d/%m/%Y"), "--");
    }

    #[test]
    fn test_datetime_from_format() {
        assert_eq!(
            datetime_from_format("2026-08-25 09:30:00", "%H:%M"),
            "09:30"
        );
        assert_eq!(datetime_from_format(ZERO_DATETIME, "%H:%M"), "--");
    }
}
