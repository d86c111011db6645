//! History view state
//!
//! The list is only ever replaced wholesale by a fetch. Deletes and other
//! mutations never patch it locally.

use std::collections::HashSet;
use std::time::Instant;

use snip_core::{UrlDetails, UrlHistoryItem};

use crate::result_view::COPIED_INDICATOR_DURATION;

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: usize = 10;

/// Details panel for one row, filled by `GET /api/urls/{code}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsPanel {
    pub code: String,
    pub loading: bool,
    pub details: Option<UrlDetails>,
    pub error: Option<String>,
}

impl DetailsPanel {
    pub fn loading(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            loading: true,
            details: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoryState {
    /// A fetch is in flight
    pub loading: bool,

    /// Fetch failure; replaces the table
    pub error: Option<String>,

    /// Delete failure; shown above the table, list kept
    pub action_error: Option<String>,

    /// Rows in backend order
    pub items: Vec<UrlHistoryItem>,

    pub selected: usize,

    pub details: Option<DetailsPanel>,

    /// Codes with a DELETE in flight
    pub deleting: HashSet<String>,

    /// Row whose short URL was just copied, with the indicator deadline
    copied: Option<(String, Instant)>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            action_error: None,
            items: Vec::new(),
            selected: 0,
            details: None,
            deleting: HashSet::new(),
            copied: None,
        }
    }
}

impl HistoryState {
    /// A fetch went out
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch outcome
    pub fn finish_load(&mut self, result: Result<Vec<UrlHistoryItem>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                self.clamp_selection();
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Rows can be acted on: loaded without a fetch error
    pub fn is_ready(&self) -> bool {
        !self.loading && self.error.is_none()
    }

    pub fn selected_item(&self) -> Option<&UrlHistoryItem> {
        if !self.is_ready() {
            return None;
        }
        self.items.get(self.selected)
    }

    pub fn is_deleting(&self, code: &str) -> bool {
        self.deleting.contains(code)
    }

    pub fn select_previous(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        self.select(self.selected + 1);
    }

    pub fn page_up(&mut self) {
        self.select(self.selected.saturating_sub(PAGE_SIZE));
    }

    pub fn page_down(&mut self) {
        self.select(self.selected + PAGE_SIZE);
    }

    pub fn select_first(&mut self) {
        self.select(0);
    }

    pub fn select_last(&mut self) {
        self.select(self.items.len().saturating_sub(1));
    }

    fn clamp_selection(&mut self) {
        self.select(self.selected);
    }

    /// Move the selection, clamped to the list
    ///
    /// The details panel belongs to one row; it closes when that row is no
    /// longer the selected one.
    fn select(&mut self, index: usize) {
        self.selected = index.min(self.items.len().saturating_sub(1));
        let selected_code = self.items.get(self.selected).map(|i| i.short_code());
        if self
            .details
            .as_ref()
            .is_some_and(|panel| Some(panel.code.as_str()) != selected_code)
        {
            self.details = None;
        }
    }

    pub fn mark_copied(&mut self, code: impl Into<String>, now: Instant) {
        self.copied = Some((code.into(), now + COPIED_INDICATOR_DURATION));
    }

    /// Whether the row with `code` shows the "copied" indicator
    pub fn is_copied(&self, code: &str) -> bool {
        self.copied.as_ref().is_some_and(|(c, _)| c == code)
    }

    pub fn tick(&mut self, now: Instant) {
        if self.copied.as_ref().is_some_and(|(_, until)| now >= *until) {
            self.copied = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use snip_core::LinkStatus;
    use std::time::Duration;

    fn item(code: &str, status: LinkStatus) -> UrlHistoryItem {
        UrlHistoryItem {
            details: UrlDetails {
                id: 1,
                short_code: code.to_string(),
                original_url: format!("https://example.com/{code}"),
                created_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
                expires_at: None,
                click_count: 0,
                last_clicked: None,
            },
            status,
        }
    }

    fn loaded(codes: &[&str]) -> HistoryState {
        let mut state = HistoryState::default();
        state.finish_load(Ok(codes
            .iter()
            .map(|c| item(c, LinkStatus::Active))
            .collect()));
        state
    }

    #[test]
    fn test_starts_loading() {
        let state = HistoryState::default();
        assert!(state.loading);
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn test_finish_load_keeps_backend_order() {
        let state = loaded(&["zzz", "aaa", "mmm"]);
        let codes: Vec<_> = state.items.iter().map(|i| i.short_code()).collect();
        assert_eq!(codes, vec!["zzz", "aaa", "mmm"]);
        assert!(!state.loading);
    }

    #[test]
    fn test_load_error_hides_rows() {
        let mut state = loaded(&["a1"]);
        state.begin_load();
        state.finish_load(Err("Failed to get URL history: Bad Gateway".to_string()));

        assert!(!state.loading);
        assert!(state.error.is_some());
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn test_selection_clamped_after_shrink() {
        let mut state = loaded(&["a", "b", "c"]);
        state.select_last();
        assert_eq!(state.selected, 2);

        state.finish_load(Ok(vec![item("a", LinkStatus::Active)]));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = loaded(&["a", "b"]);
        state.select_previous();
        assert_eq!(state.selected, 0);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        state.page_up();
        assert_eq!(state.selected, 0);
        state.page_down();
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_details_dropped_when_row_disappears() {
        let mut state = loaded(&["a", "b"]);
        state.details = Some(DetailsPanel::loading("b"));
        state.finish_load(Ok(vec![item("a", LinkStatus::Active)]));
        assert!(state.details.is_none());
    }

    #[test]
    fn test_copied_indicator_expires() {
        let mut state = loaded(&["a"]);
        let now = Instant::now();
        state.mark_copied("a", now);
        assert!(state.is_copied("a"));
        assert!(!state.is_copied("b"));

        state.tick(now + Duration::from_secs(1));
        assert!(state.is_copied("a"));
        state.tick(now + Duration::from_secs(2));
        assert!(!state.is_copied("a"));
    }
}
