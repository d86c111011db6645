//! User input normalization for shorten requests
//!
//! Pure functions used by both the TUI form and the headless `shorten`
//! subcommand, so both build byte-identical requests from the same input.

use std::sync::LazyLock;

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use thiserror::Error;

use crate::types::ShortenRequest;

/// Scheme prepended to URLs typed without one
pub const DEFAULT_SCHEME: &str = "https://";

/// Minimum length of a custom short code
pub const CUSTOM_CODE_MIN_LEN: usize = 3;

/// Maximum length of a custom short code
pub const CUSTOM_CODE_MAX_LEN: usize = 20;

static CUSTOM_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9-]{3,20}$").expect("custom code pattern is a valid regex")
});

/// Accepted layouts for the expiration field, tried in order
const EXPIRATION_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Reasons a form submission does not produce a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a URL to shorten")]
    EmptyUrl,

    #[error("Custom code must be 3-20 characters: letters, numbers, and hyphens")]
    InvalidCustomCode,
}

/// Trim the URL and prepend `https://` when no http(s) scheme is present
///
/// Returns `None` for empty or whitespace-only input.
pub fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("{DEFAULT_SCHEME}{trimmed}"))
    }
}

/// Check a (trimmed) custom code against the 3-20 `[a-zA-Z0-9-]` pattern
///
/// The backend stays authoritative; this only saves a round trip.
pub fn is_valid_custom_code(code: &str) -> bool {
    CUSTOM_CODE_RE.is_match(code)
}

/// Parse a local date-time string as typed into the expiration field
pub fn parse_local_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let naive = EXPIRATION_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())?;

    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        // DST fold: the earlier of the two instants
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        // DST gap: the wall-clock time does not exist
        LocalResult::None => None,
    }
}

/// Resolve the expiration field to an instant strictly after `now`
///
/// Empty, unparseable, and non-future values all yield `None`, which omits
/// `expires_at` from the request.
pub fn resolve_expiration(raw: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let expiry = parse_local_datetime(raw);
    match expiry {
        Some(at) if at > now => Some(at),
        Some(at) => {
            tracing::debug!("Ignoring expiration {} (not after {})", at, now);
            None
        }
        None => {
            if !raw.trim().is_empty() {
                tracing::debug!("Ignoring unparseable expiration '{}'", raw);
            }
            None
        }
    }
}

/// Build a [`ShortenRequest`] from raw field values
///
/// - the URL is trimmed and defaults to `https://`
/// - `custom_code` is included iff it is non-empty after trimming
/// - `expires_at` is included iff it parses to a moment strictly after `now`
pub fn build_shorten_request(
    url: &str,
    custom_code: &str,
    expiration: &str,
    now: DateTime<Utc>,
) -> Result<ShortenRequest, InputError> {
    let url = normalize_url(url).ok_or(InputError::EmptyUrl)?;
    let mut request = ShortenRequest::new(url);

    let code = custom_code.trim();
    if !code.is_empty() {
        if !is_valid_custom_code(code) {
            return Err(InputError::InvalidCustomCode);
        }
        request.custom_code = Some(code.to_string());
    }

    request.expires_at = resolve_expiration(expiration, now);
    Ok(request)
}
