//! Start-date parsing.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Parse a start date in one of the accepted formats.
///
/// Supports:
/// - RFC 3339 / ISO 8601 with offset: "2024-01-01T09:00:00Z" (converted to local time)
/// - Naive date-time: "2024-01-01 09:00:00" or "2024-01-01T09:00:00"
/// - Date only: "2024-01-01" (midnight)
pub fn parse_start_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)
}
