//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use tracing::info;

use crate::message::{CopyTarget, Message};
use crate::state::{AppPhase, AppState};

use super::{form, history, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick(Instant::now());
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::ShowHistory => history::handle_show(state),

        Message::CloseHistory => {
            state.close_history();
            UpdateResult::none()
        }

        Message::ResetResult => {
            state.reset_result();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form
        // ─────────────────────────────────────────────────────────
        Message::FormInput { field, text } => form::handle_input(state, field, text),

        Message::FormFocusNext => {
            state.form.focus_next();
            UpdateResult::none()
        }

        Message::FormFocusPrev => {
            state.form.focus_prev();
            UpdateResult::none()
        }

        Message::ToggleAdvanced => {
            state.form.toggle_advanced();
            UpdateResult::none()
        }

        Message::SubmitForm => form::handle_submit(state),

        Message::ShortenCompleted { result } => form::handle_completed(state, result),

        // ─────────────────────────────────────────────────────────
        // Result view
        // ─────────────────────────────────────────────────────────
        Message::CopyResultUrl => match &state.current_result {
            Some(result) => UpdateResult::action(UpdateAction::CopyToClipboard {
                text: result.short_url.clone(),
                target: CopyTarget::Result,
            }),
            None => UpdateResult::none(),
        },

        Message::OpenResultUrl => match &state.current_result {
            Some(result) => UpdateResult::action(UpdateAction::OpenBrowser {
                url: result.short_url.clone(),
                browser: state.settings.behavior.browser.clone(),
            }),
            None => UpdateResult::none(),
        },

        Message::SaveResultQr => match &state.current_result {
            Some(result) => UpdateResult::action(UpdateAction::SaveQrCode {
                data: result.short_url.clone(),
                code: result.code.clone(),
                dir: state.download_dir(),
            }),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // History view
        // ─────────────────────────────────────────────────────────
        Message::HistoryUp => {
            state.history.select_previous();
            UpdateResult::none()
        }
        Message::HistoryDown => {
            state.history.select_next();
            UpdateResult::none()
        }
        Message::HistoryPageUp => {
            state.history.page_up();
            UpdateResult::none()
        }
        Message::HistoryPageDown => {
            state.history.page_down();
            UpdateResult::none()
        }
        Message::HistoryTop => {
            state.history.select_first();
            UpdateResult::none()
        }
        Message::HistoryBottom => {
            state.history.select_last();
            UpdateResult::none()
        }

        Message::RefreshHistory => history::handle_refresh(state),
        Message::HistoryLoaded { result } => history::handle_loaded(state, result),
        Message::CopyHistoryUrl => history::handle_copy(state),
        Message::SaveHistoryQr => history::handle_save_qr(state),
        Message::OpenHistoryUrl => history::handle_open(state),
        Message::RequestDelete => history::handle_request_delete(state),
        Message::ConfirmDelete { code } => history::handle_confirm_delete(state, code),
        Message::CancelDelete => history::handle_cancel_delete(state),
        Message::UrlDeleted { code, result } => history::handle_deleted(state, code, result),
        Message::ShowDetails => history::handle_show_details(state),
        Message::HideDetails => {
            state.history.details = None;
            UpdateResult::none()
        }
        Message::DetailsLoaded { code, result } => {
            history::handle_details_loaded(state, code, result)
        }

        // ─────────────────────────────────────────────────────────
        // Host integrations
        // ─────────────────────────────────────────────────────────
        Message::Copied { target } => {
            let now = Instant::now();
            match target {
                CopyTarget::Result => state.result_view.mark_copied(now),
                CopyTarget::History { code } => state.history.mark_copied(code, now),
            }
            UpdateResult::none()
        }

        Message::QrSaved { path } => {
            info!("QR code saved to {}", path.display());
            state.set_status(format!("QR code saved to {}", path.display()), Instant::now());
            UpdateResult::none()
        }
    }
}
