//! Small helpers shared across the client modules.

use chrono::Utc;

/// Current Unix timestamp in seconds.
pub(crate) fn unix_timestamp_now() -> i64 {
    Utc::now().timestamp()
}

/// Returns true when `value` starts with an http or https scheme.
pub(crate) fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Collapse runs of whitespace so multi-line response bodies fit on one
/// log or error line.
pub(crate) fn compact_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
