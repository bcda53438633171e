use chrono::{DateTime, Utc};

/// Seconds since the Unix epoch, UTC.
pub fn now_unix() -> i64 {
    Utc::now().timestamp()
}

/// "2026-03-15 12:00 UTC", or the raw number if it's out of range.
pub fn format_timestamp(ts: i64) -> String {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}
