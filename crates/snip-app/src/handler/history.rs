//! History view handlers
//!
//! Every mutation is followed by a full re-fetch; rows are never patched.

use snip_core::{UrlDetails, UrlHistoryItem};
use tracing::{info, warn};

use crate::confirm_dialog::ConfirmDialogState;
use crate::history::DetailsPanel;
use crate::message::CopyTarget;
use crate::state::{AppState, View};

use super::{UpdateAction, UpdateResult};

pub fn handle_show(state: &mut AppState) -> UpdateResult {
    if state.open_history() {
        UpdateResult::action(UpdateAction::FetchHistory)
    } else {
        UpdateResult::none()
    }
}

pub fn handle_refresh(state: &mut AppState) -> UpdateResult {
    if state.view != View::History || state.history.loading {
        return UpdateResult::none();
    }
    state.history.action_error = None;
    state.history.begin_load();
    UpdateResult::action(UpdateAction::FetchHistory)
}

pub fn handle_loaded(
    state: &mut AppState,
    result: Result<Vec<UrlHistoryItem>, String>,
) -> UpdateResult {
    if let Err(e) = &result {
        warn!("History fetch failed: {}", e);
    }
    state.history.finish_load(result);
    UpdateResult::none()
}

pub fn handle_copy(state: &mut AppState) -> UpdateResult {
    let Some(item) = state.history.selected_item() else {
        return UpdateResult::none();
    };
    let code = item.short_code().to_string();
    UpdateResult::action(UpdateAction::CopyToClipboard {
        text: state.short_url(&code),
        target: CopyTarget::History { code },
    })
}

/// Save a freshly generated QR code for the selected row
pub fn handle_save_qr(state: &mut AppState) -> UpdateResult {
    let Some(item) = state.history.selected_item() else {
        return UpdateResult::none();
    };
    let code = item.short_code().to_string();
    UpdateResult::action(UpdateAction::SaveQrCode {
        data: state.short_url(&code),
        code,
        dir: state.download_dir(),
    })
}

/// Open the selected row; expired and unknown rows cannot be opened
pub fn handle_open(state: &mut AppState) -> UpdateResult {
    let Some(item) = state.history.selected_item() else {
        return UpdateResult::none();
    };
    if !item.is_active() {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::OpenBrowser {
        url: state.short_url(item.short_code()),
        browser: state.settings.behavior.browser.clone(),
    })
}

pub fn handle_request_delete(state: &mut AppState) -> UpdateResult {
    let Some(item) = state.history.selected_item() else {
        return UpdateResult::none();
    };
    let code = item.short_code().to_string();
    if state.history.is_deleting(&code) {
        return UpdateResult::none();
    }

    if state.settings.behavior.confirm_delete {
        state.confirm_dialog = Some(ConfirmDialogState::delete_url(&code));
        return UpdateResult::none();
    }
    begin_delete(state, code)
}

/// Delete the code the dialog named, whatever row is selected by now
pub fn handle_confirm_delete(state: &mut AppState, code: String) -> UpdateResult {
    if state.confirm_dialog.take().is_none() || state.history.is_deleting(&code) {
        return UpdateResult::none();
    }
    begin_delete(state, code)
}

fn begin_delete(state: &mut AppState, code: String) -> UpdateResult {
    state.history.deleting.insert(code.clone());
    UpdateResult::action(UpdateAction::DeleteUrl { code })
}

pub fn handle_cancel_delete(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog = None;
    UpdateResult::none()
}

pub fn handle_deleted(
    state: &mut AppState,
    code: String,
    result: Result<(), String>,
) -> UpdateResult {
    state.history.deleting.remove(&code);
    match result {
        Ok(()) => {
            info!("Deleted {}, reloading history", code);
            state.history.action_error = None;
            state.history.begin_load();
            UpdateResult::action(UpdateAction::FetchHistory)
        }
        Err(message) => {
            warn!("Delete of {} failed: {}", code, message);
            state.history.action_error = Some(message);
            UpdateResult::none()
        }
    }
}

pub fn handle_show_details(state: &mut AppState) -> UpdateResult {
    let Some(item) = state.history.selected_item() else {
        return UpdateResult::none();
    };
    let code = item.short_code().to_string();
    state.history.details = Some(DetailsPanel::loading(code.clone()));
    UpdateResult::action(UpdateAction::FetchDetails { code })
}

pub fn handle_details_loaded(
    state: &mut AppState,
    code: String,
    result: Result<UrlDetails, String>,
) -> UpdateResult {
    // Ignore answers for a panel that was closed or moved to another row
    let Some(panel) = state.history.details.as_mut().filter(|p| p.code == code) else {
        return UpdateResult::none();
    };
    panel.loading = false;
    match result {
        Ok(details) => {
            panel.details = Some(details);
            panel.error = None;
        }
        Err(message) => panel.error = Some(message),
    }
    UpdateResult::none()
}
