//! Result view state: QR preview and the transient "copied" indicator

use std::time::{Duration, Instant};

use snip_client::qr;
use snip_core::ShortenResponse;
use tracing::warn;

/// How long the "copied" indicator stays up
pub const COPIED_INDICATOR_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Default)]
pub struct ResultViewState {
    /// Short URL the current preview encodes
    qr_source: Option<String>,

    /// Unicode rendering of the QR code; `None` when generation failed
    pub qr_preview: Option<String>,

    copied_until: Option<Instant>,
}

impl ResultViewState {
    /// Prepare the view for `result`
    ///
    /// The QR preview is regenerated only when the short URL changed.
    pub fn show(&mut self, result: &ShortenResponse) {
        if self.qr_source.as_deref() != Some(result.short_url.as_str()) {
            self.qr_preview = match qr::render_unicode(&result.short_url) {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!("QR preview for {} failed: {}", result.short_url, e);
                    None
                }
            };
            self.qr_source = Some(result.short_url.clone());
        }
        self.copied_until = None;
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_until = Some(now + COPIED_INDICATOR_DURATION);
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some()
    }

    /// Drop the indicator once its deadline passed
    pub fn tick(&mut self, now: Instant) {
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }

    /// The short URL encoded by the current preview
    pub fn qr_source(&self) -> Option<&str> {
        self.qr_source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(code: &str) -> ShortenResponse {
        ShortenResponse {
            short_url: format!("http://host/{code}"),
            original_url: "https://example.com".to_string(),
            code: code.to_string(),
            expires_at: None,
            qr_code: None,
        }
    }

    #[test]
    fn test_show_generates_preview() {
        let mut view = ResultViewState::default();
        view.show(&response("abc123"));
        assert!(view.qr_preview.is_some());
        assert_eq!(view.qr_source(), Some("http://host/abc123"));
    }

    #[test]
    fn test_preview_regenerated_when_url_changes() {
        let mut view = ResultViewState::default();
        view.show(&response("aaa"));
        let first = view.qr_preview.clone();

        view.show(&response("aaa"));
        assert_eq!(view.qr_preview, first);

        view.show(&response("bbb"));
        assert_ne!(view.qr_preview, first);
        assert_eq!(view.qr_source(), Some("http://host/bbb"));
    }

    #[test]
    fn test_copied_indicator_reverts_after_two_seconds() {
        let mut view = ResultViewState::default();
        let start = Instant::now();
        view.mark_copied(start);
        assert!(view.is_copied());

        view.tick(start + Duration::from_millis(1999));
        assert!(view.is_copied());

        view.tick(start + Duration::from_secs(2));
        assert!(!view.is_copied());
    }

    #[test]
    fn test_show_resets_copied_indicator() {
        let mut view = ResultViewState::default();
        view.mark_copied(Instant::now());
        view.show(&response("abc"));
        assert!(!view.is_copied());
    }
}
