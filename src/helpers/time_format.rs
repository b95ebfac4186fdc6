//! Expiry label rendering. "Now" is always an explicit parameter so the
//! output stays deterministic under test.

use chrono::{DateTime, Local, Utc};

/// Local-time date and time for display. The exact shape is not a
/// contract; both components being present is.
pub fn format_absolute(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Human-readable time remaining until `ts`, as the service UI has
/// always rendered it:
/// - at or before `now` -> "Expired"
/// - at least a whole day away -> "<D> day(s) <H> hour(s)"
/// - at least a whole hour away -> "<H> hour(s)"
/// - otherwise -> "Less than 1 hour"
pub fn format_relative(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if ts <= now {
        return "Expired".to_string();
    }

    let total_hours = (ts - now).num_hours();
    let days = total_hours / 24;
    let hours = total_hours % 24;

    if days > 0 {
        format!("{} day{} {} hour{}", days, plural(days), hours, plural(hours))
    } else if hours > 0 {
        format!("{} hour{}", hours, plural(hours))
    } else {
        "Less than 1 hour".to_string()
    }
}

// Pluralizes only above 1; a count of 0 renders singular ("1 day 0 hour"),
// matching the labels the service has always shown.
fn plural(count: i64) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}
