//! Elapsed-duration calculation for timer sessions.
//!
//! Start instants are persisted as RFC 3339 strings. Parsing is lenient:
//! a trailing `Z`, an explicit offset, or no timezone at all (read as UTC)
//! are accepted. A malformed instant yields zero elapsed seconds rather
//! than an error — undercounting a session is preferable to failing a
//! stop or status call over one corrupt row.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Parse a persisted start instant.
///
/// Returns `None` when the value is not a recognizable timestamp.
pub fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // No timezone marker at all: treat as UTC.
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    None
}

/// Whole seconds elapsed from `raw` until now, clamped at zero.
///
/// A future-dated start (clock skew) or a malformed instant both yield 0.
pub fn elapsed_seconds(raw: &str) -> i64 {
    elapsed_seconds_at(raw, Utc::now())
}

/// Whole seconds elapsed from `raw` until `now`, clamped at zero.
pub fn elapsed_seconds_at(raw: &str, now: DateTime<Utc>) -> i64 {
    match parse_start_time(raw) {
        Some(start) => (now - start).num_seconds().max(0),
        None => 0,
    }
}
