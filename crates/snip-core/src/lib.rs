//! # snip-core - Core Domain Types
//!
//! Foundation crate for snip. Provides the backend's JSON contract types,
//! input normalization, display formatting, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ShortenRequest`] / [`ShortenResponse`] - `POST /api/shorten` body and reply
//! - [`UrlDetails`] - One stored short URL
//! - [`UrlHistoryItem`] - A history row (details + [`LinkStatus`])
//!
//! ### Input (`input`)
//! - [`build_shorten_request()`] - Normalize raw form fields into a request
//! - [`normalize_url()`], [`is_valid_custom_code()`], [`resolve_expiration()`]
//!
//! ### Formatting (`format`)
//! - [`truncate_url()`], [`format_timestamp()`], [`capitalize()`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use snip_core::prelude::*;
//! ```

pub mod error;
pub mod format;
pub mod input;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all snip crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use format::{capitalize, format_timestamp, truncate_url, truncate_with_ellipsis};
pub use input::{
    build_shorten_request, is_valid_custom_code, normalize_url, parse_local_datetime,
    resolve_expiration, InputError,
};
pub use types::{LinkStatus, ShortenRequest, ShortenResponse, UrlDetails, UrlHistoryItem};
