//! snip-client - Backend API client and host integrations
//!
//! Everything that leaves the process lives here: the JSON REST client for
//! the shortener backend, plus the clipboard, browser and QR-code
//! integrations used by the result and history views.

pub mod api;
pub mod browser;
pub mod clipboard;
pub mod endpoints;
pub mod http;
pub mod qr;

pub use api::{LocalShortenerApi, ShortenerApi};
pub use endpoints::{Endpoints, DEFAULT_API_BASE_URL};
pub use http::HttpClient;
