//! Post date parsing and display.
//!
//! Dates stay as the raw ISO-8601 strings found in the data file; they are
//! only parsed on demand for sorting and display.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;

/// Default display pattern: "Jan 5, 2024".
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

/// Parse an ISO-8601 date or datetime.
///
/// Accepted shapes:
/// - RFC 3339: `2024-01-15T10:30:00Z`, `2024-01-15T10:30:00+02:00`
/// - local datetime, read as UTC: `2024-01-15T10:30:00`, `2024-01-15T10:30`,
///   also with a space instead of `T`
/// - date only, midnight UTC: `2024-01-15`
/// - reduced precision, first day of the period: `2024-01`, `2024`
pub fn parse_date(iso: &str) -> Option<DateTime<Utc>> {
    let iso = iso.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.with_timezone(&Utc));
    }

    const DATETIME_PATTERNS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for pattern in DATETIME_PATTERNS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(iso, pattern) {
            return Some(dt.and_utc());
        }
    }

    let full = match iso.len() {
        4 => format!("{iso}-01-01"),
        7 => format!("{iso}-01"),
        _ => iso.to_owned(),
    };
    NaiveDate::parse_from_str(&full, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Render a date for display, falling back to the input when it does not parse.
///
/// A pattern chrono cannot render also falls back to the raw string.
pub fn format_date(iso: &str, pattern: &str) -> String {
    let Some(dt) = parse_date(iso) else {
        return iso.to_owned();
    };

    let mut out = String::new();
    match write!(out, "{}", dt.format(pattern)) {
        Ok(()) => out,
        Err(_) => iso.to_owned(),
    }
}

/// Check that a strftime pattern only contains items chrono understands.
pub fn is_valid_pattern(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}
