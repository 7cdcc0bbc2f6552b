//! Common display utilities and helpers

use chrono::{DateTime, Utc};

/// Truncate string to max length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format timestamp string to ISO datetime (YYYY-MM-DDTHH:MM:SSZ).
///
/// Accepts RFC 3339 strings and epoch milliseconds; empty values become `--`.
pub fn format_as_iso_datetime(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return "--".to_string();
    }

    if let Ok(dt) = timestamp.parse::<DateTime<Utc>>() {
        return dt.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    }

    if let Ok(ts_ms) = timestamp.parse::<i64>() {
        if let Some(dt) = DateTime::from_timestamp_millis(ts_ms) {
            return dt.format("%Y-%m-%dT%H:%M:%SZ").to_string();
        }
    }

    timestamp.to_string()
}

/// `--` for empty values
pub fn or_dash(s: &str) -> String {
    if s.is_empty() {
        "--".to_string()
    } else {
        s.to_string()
    }
}
