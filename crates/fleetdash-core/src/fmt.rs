//! Shared formatting helpers for table cells and footers.
//!
//! All pure formatting functions (no ratatui styles, no UI layout) live here.

use chrono::{DateTime, Utc};

use crate::table::ShowingRange;

/// Placeholder shown for absent values.
pub const DASH: &str = "—";

/// Masked secret, never derived from the secret itself.
pub const MASK: &str = "••••••••";

/// Returns the value or [`DASH`] when absent or empty.
pub fn dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => DASH.to_string(),
    }
}

/// Date part: `"Oct 19, 2026"`.
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Time part: `"14:03:22"`.
pub fn format_time(ts: DateTime<Utc>) -> String {
    ts.format("%H:%M:%S").to_string()
}

/// `"Oct 19, 2026 14:03:22"`, or [`DASH`] when absent.
pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => format!("{} {}", format_date(ts), format_time(ts)),
        None => DASH.to_string(),
    }
}

/// `"stream_started"` -> `"stream started"`.
pub fn humanize_action(action: &str) -> String {
    action.replace('_', " ")
}

/// Numeric limit without a trailing `.0`; absent limits render as `0`.
pub fn format_limit(limit: Option<f64>) -> String {
    let v = limit.unwrap_or(0.0);
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// `"ops / ••••••••"`. Missing username renders as [`DASH`].
pub fn format_credentials(username: Option<&str>, has_password: bool) -> String {
    let user = dash(username);
    if has_password {
        format!("{} / {}", user, MASK)
    } else {
        user
    }
}

/// `"Yes"` / `"No"`.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Footer text: `"Showing 1–10 of 42 devices"`, or `"Showing 0 of 0 devices"`.
pub fn format_showing(range: Option<ShowingRange>, total: usize, noun: &str) -> String {
    match range {
        Some(r) => format!("Showing {}–{} of {} {}", r.first, r.last, r.total, noun),
        None => format!("Showing 0 of {} {}", total, noun),
    }
}

/// Truncate to `width` characters, replacing the tail with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}
