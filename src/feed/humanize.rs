//! Relative time labels ("3 minutes ago", "2 days from now").
//!
//! Buckets follow the go-humanize magnitude table: a month is 30 days, a year
//! is 12 months, and anything from 37 years on is "a long while".

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 12 * MONTH;
const LONG_TIME: i64 = 37 * YEAR;

/// `(exclusive upper bound, label, divisor)`. A divisor of 0 means the label
/// is used as-is; otherwise it is a plural unit prefixed by `secs / divisor`.
const MAGNITUDES: [(i64, &str, i64); 16] = [
    (2, "1 second", 0),
    (MINUTE, "seconds", 1),
    (2 * MINUTE, "1 minute", 0),
    (HOUR, "minutes", MINUTE),
    (2 * HOUR, "1 hour", 0),
    (DAY, "hours", HOUR),
    (2 * DAY, "1 day", 0),
    (WEEK, "days", DAY),
    (2 * WEEK, "1 week", 0),
    (MONTH, "weeks", WEEK),
    (2 * MONTH, "1 month", 0),
    (YEAR, "months", MONTH),
    (18 * MONTH, "1 year", 0),
    (2 * YEAR, "2 years", 0),
    (LONG_TIME, "years", YEAR),
    (i64::MAX, "a long while", 0),
];

/// Describe `then` relative to `now`.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then).num_seconds();
    let suffix = if delta < 0 { "from now" } else { "ago" };
    let secs = delta.saturating_abs();

    if secs < 1 {
        return "now".to_string();
    }

    let (_, label, divisor) = MAGNITUDES
        .iter()
        .copied()
        .find(|(bound, _, _)| secs < *bound)
        .unwrap_or((i64::MAX, "a long while", 0));

    if divisor == 0 {
        format!("{} {}", label, suffix)
    } else {
        format!("{} {} {}", secs / divisor, label, suffix)
    }
}
