//! Shared text helpers for table output

use chrono::DateTime;

/// Truncate to `max_len` characters, marking the cut with `...`
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// The first `n` characters of `s`
pub fn prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Create a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Render UTC epoch seconds as `YYYY-MM-DD HH:MM:SS`
pub fn format_epoch(seconds: f64) -> String {
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9) as u32;
    match DateTime::from_timestamp(whole as i64, nanos) {
        Some(at) => at.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format!("{}", seconds),
    }
}
