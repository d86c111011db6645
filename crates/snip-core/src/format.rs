//! Display formatting helpers

use chrono::{DateTime, Local, Utc};

/// Maximum number of characters of an original URL shown in a history row
pub const URL_DISPLAY_LIMIT: usize = 40;

/// Truncate `text` to `limit` characters, appending `...` when cut
///
/// Counts chars, not bytes, so multi-byte URLs never split a code point.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Truncate an original URL for the history table
pub fn truncate_url(url: &str) -> String {
    truncate_with_ellipsis(url, URL_DISPLAY_LIMIT)
}

/// Local date plus short (hour:minute) time
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
