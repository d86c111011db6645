//! Backend endpoint resolution
//!
//! The JSON API and the public short links may live on different origins
//! (e.g. the API behind a proxy, redirects served directly by the backend),
//! so the two bases are kept separately.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use snip_core::prelude::*;
use url::Url;

/// Backend origin used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Characters escaped when a short code is used as a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Resolved API and short-link bases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: String,
    shortlink_base: String,
}

impl Endpoints {
    /// Create endpoints, validating both bases
    ///
    /// `shortlink_base` defaults to the API base. Trailing slashes are
    /// stripped so joined URLs never contain `//`.
    pub fn new(api_base: &str, shortlink_base: Option<&str>) -> Result<Self> {
        let api_base = normalize_base(api_base)?;
        let shortlink_base = match shortlink_base {
            Some(base) => normalize_base(base)?,
            None => api_base.clone(),
        };
        Ok(Self {
            api_base,
            shortlink_base,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn shortlink_base(&self) -> &str {
        &self.shortlink_base
    }

    /// Absolute URL of an API path (path must start with `/`)
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// `{api}/api/urls/{code}` with the code escaped as one path segment
    pub fn url_details(&self, code: &str) -> String {
        let segment = utf8_percent_encode(code, PATH_SEGMENT);
        self.api_url(&format!("/api/urls/{segment}"))
    }

    /// The user-facing short URL for a code: `{shortlink_base}/{code}`
    ///
    /// Pure formatting, no I/O.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.shortlink_base, code)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE_URL.to_string(),
            shortlink_base: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

fn normalize_base(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| Error::invalid_base_url(raw, e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(Error::invalid_base_url(
            raw,
            format!("unsupported scheme '{other}'"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_joins_base_and_code() {
        let endpoints = Endpoints::new("http://localhost:8080", None).unwrap();
        assert_eq!(endpoints.short_url("abc123"), "http://localhost:8080/abc123");
    }

    #[test]
    fn test_short_url_is_pure() {
        let endpoints = Endpoints::new("https://api.example.com", Some("https://ex.co")).unwrap();
        let first = endpoints.short_url("promo");
        let second = endpoints.short_url("promo");
        assert_eq!(first, second);
        assert_eq!(first, "https://ex.co/promo");
    }

    #[test]
    fn test_shortlink_base_defaults_to_api_base() {
        let endpoints = Endpoints::new("https://api.example.com", None).unwrap();
        assert_eq!(endpoints.shortlink_base(), "https://api.example.com");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let endpoints =
            Endpoints::new("http://localhost:8080/", Some("http://go.example/")).unwrap();
        assert_eq!(endpoints.api_url("/api/urls"), "http://localhost:8080/api/urls");
        assert_eq!(endpoints.short_url("x1y"), "http://go.example/x1y");
    }

    #[test]
    fn test_url_details_escapes_code() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.url_details("a b/c"),
            "http://localhost:8080/api/urls/a%20b%2Fc"
        );
        assert_eq!(
            endpoints.url_details("my-link"),
            "http://localhost:8080/api/urls/my-link"
        );
    }

    #[test]
    fn test_invalid_base_rejected() {
        assert!(Endpoints::new("localhost:8080/api", None).is_err());
        assert!(Endpoints::new("not a url", None).is_err());
        assert!(Endpoints::new("ftp://example.com", None).is_err());
    }

    #[test]
    fn test_default_points_at_local_backend() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.api_base(), DEFAULT_API_BASE_URL);
        assert_eq!(endpoints.shortlink_base(), DEFAULT_API_BASE_URL);
    }
}
