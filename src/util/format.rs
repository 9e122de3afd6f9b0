//! Small display formatting helpers.

use chrono::{DateTime, Utc};

/// Format a latency reading for status output.
#[must_use]
pub fn format_latency(latency_ms: Option<u64>) -> String {
    latency_ms.map_or_else(|| "-".to_string(), |ms| format!("{ms}ms"))
}

/// Format a last-checked timestamp as a relative age.
#[must_use]
pub fn format_age(checked: Option<DateTime<Utc>>) -> String {
    let Some(checked) = checked else {
        return "never".to_string();
    };
    let secs = (Utc::now() - checked).num_seconds().max(0);
    if secs < 60 {
        format!("{secs}s ago")
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}
