//! Domain types shared by the API client, app state and UI
//!
//! These mirror the JSON contract of the shortener backend. Nothing here is
//! mutated by the client after it is received; fresh values only arrive by
//! re-fetching.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/shorten`
///
/// Optional fields are omitted from the JSON entirely when `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenRequest {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            custom_code: None,
            expires_at: None,
        }
    }

    pub fn with_custom_code(mut self, code: impl Into<String>) -> Self {
        self.custom_code = Some(code.into());
        self
    }

    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

/// Successful response of `POST /api/shorten`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
    pub code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Server-rendered QR code (data URL), when the backend provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
}

/// One stored short URL as known to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlDetails {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub click_count: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_clicked: Option<DateTime<Utc>>,
}

/// Lifecycle status of a short URL, derived by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    Active,
    Expired,
    #[serde(other)]
    Unknown,
}

impl LinkStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, LinkStatus::Active)
    }

    /// Wire name of the status (`"active"`, `"expired"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkStatus::Active => "active",
            LinkStatus::Expired => "expired",
            LinkStatus::Unknown => "unknown",
        }
    }

    /// Status word with its first letter capitalized, as shown in badges
    pub fn label(&self) -> String {
        crate::format::capitalize(self.as_str())
    }
}

impl std::fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A history row: [`UrlDetails`] plus the backend-derived status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlHistoryItem {
    #[serde(flatten)]
    pub details: UrlDetails,
    pub status: LinkStatus,
}

impl UrlHistoryItem {
    pub fn short_code(&self) -> &str {
        &self.details.short_code
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_request_omits_empty_optionals() {
        let req = ShortenRequest::new("https://example.com");
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"url":"https://example.com"}"#);
    }

    #[test]
    fn test_request_includes_custom_code_and_expiry() {
        let expiry = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap();
        let req = ShortenRequest::new("https://example.com")
            .with_custom_code("my-link")
            .with_expires_at(expiry);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["custom_code"], "my-link");
        assert_eq!(value["expires_at"], "2030-01-02T03:04:05Z");
    }

    #[test]
    fn test_response_without_optional_fields() {
        let json = r#"{"short_url":"http://host/abc123","original_url":"https://example.com","code":"abc123"}"#;
        let resp: ShortenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.short_url, "http://host/abc123");
        assert_eq!(resp.code, "abc123");
        assert!(resp.expires_at.is_none());
        assert!(resp.qr_code.is_none());
    }

    #[test]
    fn test_history_item_flattens_details() {
        let json = r#"{
            "id": 7,
            "short_code": "abc123",
            "original_url": "https://example.com",
            "created_at": "2024-05-01T10:30:00Z",
            "expires_at": "2024-05-01T11:30:00Z",
            "click_count": 3,
            "status": "expired"
        }"#;
        let item: UrlHistoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.details.id, 7);
        assert_eq!(item.short_code(), "abc123");
        assert_eq!(item.details.click_count, 3);
        assert!(item.details.last_clicked.is_none());
        assert_eq!(item.status, LinkStatus::Expired);
        assert!(!item.is_active());
    }

    #[test]
    fn test_details_click_count_defaults_to_zero() {
        let json = r#"{"id":1,"short_code":"x1y","original_url":"https://a.b","created_at":"2024-01-01T00:00:00Z"}"#;
        let details: UrlDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.click_count, 0);
    }

    #[test]
    fn test_unknown_status_does_not_fail_parsing() {
        let status: LinkStatus = serde_json::from_str(r#""paused""#).unwrap();
        assert_eq!(status, LinkStatus::Unknown);
        assert!(!status.is_active());
    }

    #[test]
    fn test_status_label_is_capitalized() {
        assert_eq!(LinkStatus::Active.label(), "Active");
        assert_eq!(LinkStatus::Expired.label(), "Expired");
    }
}
