//! Application state (Model in TEA pattern)

use std::path::PathBuf;
use std::time::{Duration, Instant};

use snip_client::Endpoints;
use snip_core::ShortenResponse;

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::form::FormState;
use crate::history::HistoryState;
use crate::result_view::ResultViewState;
use crate::shorten::ShortenState;

/// How long a status line message stays visible
pub const STATUS_LINE_DURATION: Duration = Duration::from_secs(4);

/// Which view the root renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Result,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Transient one-line notice (e.g. where a QR code was saved)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    until: Instant,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub view: View,

    /// View the history was opened from
    history_return: View,

    /// Last successful shorten result, shown by the result view
    pub current_result: Option<ShortenResponse>,

    pub form: FormState,
    pub shorten: ShortenState,
    pub result_view: ResultViewState,
    pub history: HistoryState,

    /// Modal confirmation on top of the current view
    pub confirm_dialog: Option<ConfirmDialogState>,

    pub status: Option<StatusLine>,

    pub settings: Settings,
    pub endpoints: Endpoints,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default(), Endpoints::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings, endpoints: Endpoints) -> Self {
        Self {
            phase: AppPhase::Running,
            view: View::Form,
            history_return: View::Form,
            current_result: None,
            form: FormState::new(),
            shorten: ShortenState::default(),
            result_view: ResultViewState::default(),
            history: HistoryState::default(),
            confirm_dialog: None,
            status: None,
            settings,
            endpoints,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn history_enabled(&self) -> bool {
        self.settings.ui.show_history
    }

    /// Store a fresh result and switch to the result view
    pub fn show_result(&mut self, result: ShortenResponse) {
        self.store_result(result);
        self.view = View::Result;
    }

    /// Store a result without switching views
    ///
    /// Leaving the history afterwards lands on the result.
    pub fn store_result(&mut self, result: ShortenResponse) {
        self.result_view.show(&result);
        self.current_result = Some(result);
        if self.view == View::History {
            self.history_return = View::Result;
        }
    }

    /// Drop the stored result and return to the form
    pub fn reset_result(&mut self) {
        self.current_result = None;
        self.view = View::Form;
    }

    /// Switch to the history view and mark a fetch as started
    ///
    /// Returns false when the history view is disabled.
    pub fn open_history(&mut self) -> bool {
        if !self.history_enabled() {
            return false;
        }
        if self.view != View::History {
            self.history_return = self.view;
        }
        self.view = View::History;
        self.history.details = None;
        self.history.action_error = None;
        self.history.begin_load();
        true
    }

    /// Leave the history for the view it was opened from
    pub fn close_history(&mut self) {
        self.view = match self.history_return {
            View::Result if self.current_result.is_some() => View::Result,
            _ => View::Form,
        };
        self.history.details = None;
    }

    /// The user-facing short URL for a code
    pub fn short_url(&self, code: &str) -> String {
        self.endpoints.short_url(code)
    }

    pub fn download_dir(&self) -> PathBuf {
        self.settings.behavior.resolved_download_dir()
    }

    pub fn set_status(&mut self, text: impl Into<String>, now: Instant) {
        self.status = Some(StatusLine {
            text: text.into(),
            until: now + STATUS_LINE_DURATION,
        });
    }

    /// Expire transient indicators
    pub fn tick(&mut self, now: Instant) {
        self.result_view.tick(now);
        self.history.tick(now);
        if self.status.as_ref().is_some_and(|s| now >= s.until) {
            self.status = None;
        }
    }
}
