//! Utility functions for text escaping and timestamp formatting.
//!
//! This module provides helpers used by the page renderers:
//! - HTML escaping for values taken from content files
//! - Lenient ISO-8601 parsing for the publish-time column

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

/// Date-time layouts that carry an explicit UTC offset.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Date-time layouts without an offset.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Escape text for safe inclusion in HTML element content or a quoted
/// attribute value. `&`, `<`, `>`, `"` and `'` are replaced by their entities.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render a publish timestamp as a zero-padded `HH:MM` time of day.
///
/// The time is taken in the timestamp's own offset; no conversion to local
/// time happens.
///
/// # Returns
///
/// - An empty string when the timestamp is absent or empty.
/// - `HH:MM` when it parses as ISO-8601. A `Z` suffix is read as `+00:00`.
/// - The raw input, unchanged, when it cannot be parsed.
pub fn format_time(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    match parse_iso8601_time(raw) {
        Some(time) => time.format("%H:%M").to_string(),
        None => {
            debug!(raw, "Unrecognised publish time; rendering as-is");
            raw.to_string()
        }
    }
}

/// Extract the wall-clock time from an ISO-8601 date or date-time.
fn parse_iso8601_time(raw: &str) -> Option<NaiveTime> {
    let normalized = raw.replace('Z', "+00:00");

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.time());
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
    {
        return Some(dt.time());
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
    {
        return Some(dt.time());
    }

    // A bare date means midnight.
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.time())
}
