use chrono::{DateTime, Utc};

/// RFC 1123 rendering in UTC, e.g. `Mon, 02 Jan 2006 15:04:05 UTC`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%a, %d %b %Y %H:%M:%S UTC").to_string()
}
