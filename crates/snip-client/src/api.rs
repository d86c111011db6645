//! Shortener backend API abstraction
//!
//! All HTTP communication with the shortener backend goes through
//! [`ShortenerApi`]. Upper layers (app actions, headless commands) never
//! build requests directly, so tests can substitute an in-memory fake.

use snip_core::prelude::*;
use snip_core::{ShortenRequest, ShortenResponse, UrlDetails, UrlHistoryItem};

use crate::endpoints::Endpoints;

/// Backend operations, one request per call
///
/// Every call is one-shot: no retries, no caching. Failures carry a
/// human-readable message (see [`snip_core::Error::Http`] and
/// [`snip_core::Error::Network`]).
#[trait_variant::make(ShortenerApi: Send)]
pub trait LocalShortenerApi {
    /// `POST /api/shorten`
    async fn create_short_url(&self, request: &ShortenRequest) -> Result<ShortenResponse>;

    /// `GET /api/urls/{code}`
    async fn get_url_details(&self, code: &str) -> Result<UrlDetails>;

    /// `GET /api/urls`
    async fn get_all_urls(&self) -> Result<Vec<UrlDetails>>;

    /// `DELETE /api/urls/{code}`
    async fn delete_url(&self, code: &str) -> Result<()>;

    /// `GET /api/history`, in backend order
    async fn get_url_history(&self) -> Result<Vec<UrlHistoryItem>>;

    /// Cheap reachability probe. Offline is a normal state, not an error.
    async fn ping(&self) -> bool;

    /// Endpoints this client talks to
    fn endpoints(&self) -> &Endpoints;

    /// Full short URL for a code. Pure, no I/O.
    fn short_url(&self, code: &str) -> String {
        self.endpoints().short_url(code)
    }
}
