//! Key event handlers for the different views

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, View};

/// Convert key events to messages based on the current view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere, dialogs included
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.confirm_dialog.is_some() {
        return handle_key_confirm_dialog(state, key);
    }

    match state.view {
        View::Form => handle_key_form(state, key),
        View::Result => handle_key_result(state, key),
        View::History => handle_key_history(state, key),
    }
}

fn handle_key_confirm_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    let dialog = state.confirm_dialog.as_ref()?;
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => dialog.confirm_message(),
        InputKey::Char('n' | 'N') | InputKey::Esc => dialog.cancel_message(),
        _ => None,
    }
}

/// Form keys. Every printable character is text here, so `q` does not quit.
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let form = &state.form;
    let loading = state.shorten.loading;

    match key {
        InputKey::Esc => Some(Message::Quit),

        InputKey::CharCtrl('l') | InputKey::F(2) if state.history_enabled() => {
            Some(Message::ShowHistory)
        }

        InputKey::Tab => Some(Message::FormFocusNext),
        InputKey::BackTab => Some(Message::FormFocusPrev),
        InputKey::CharCtrl('a') => Some(Message::ToggleAdvanced),

        // Inputs are disabled while a request is in flight
        _ if loading => None,

        InputKey::Enter => Some(Message::SubmitForm),

        InputKey::Backspace => {
            let mut text = form.value(form.focus).to_string();
            text.pop()?;
            Some(Message::FormInput {
                field: form.focus,
                text,
            })
        }

        // Clear the focused field
        InputKey::CharCtrl('u') => Some(Message::FormInput {
            field: form.focus,
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut text = form.value(form.focus).to_string();
            text.push(c);
            Some(Message::FormInput {
                field: form.focus,
                text,
            })
        }

        _ => None,
    }
}

fn handle_key_result(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('c') => Some(Message::CopyResultUrl),
        InputKey::Char('o') => Some(Message::OpenResultUrl),
        InputKey::Char('s') => Some(Message::SaveResultQr),
        InputKey::Char('n') | InputKey::Esc => Some(Message::ResetResult),
        InputKey::Char('h') if state.history_enabled() => Some(Message::ShowHistory),
        _ => None,
    }
}

fn handle_key_history(state: &AppState, key: InputKey) -> Option<Message> {
    let history = &state.history;

    match key {
        InputKey::Char('q') => Some(Message::Quit),

        InputKey::Esc if history.details.is_some() => Some(Message::HideDetails),
        InputKey::Esc | InputKey::Char('b') => Some(Message::CloseHistory),

        // No refetch while one is in flight
        InputKey::Char('r') if !history.loading => Some(Message::RefreshHistory),

        // Row actions need a loaded list
        _ if !history.is_ready() => None,

        InputKey::Up | InputKey::Char('k') => Some(Message::HistoryUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::HistoryDown),
        InputKey::PageUp => Some(Message::HistoryPageUp),
        InputKey::PageDown => Some(Message::HistoryPageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::HistoryTop),
        InputKey::End | InputKey::Char('G') => Some(Message::HistoryBottom),

        _ if history.selected_item().is_none() => None,

        InputKey::Char('c') => Some(Message::CopyHistoryUrl),
        InputKey::Char('s') => Some(Message::SaveHistoryQr),
        InputKey::Char('d') => Some(Message::RequestDelete),
        InputKey::Char('i') | InputKey::Enter => Some(Message::ShowDetails),

        // Only active links can be opened
        InputKey::Char('o') if history.selected_item().is_some_and(|i| i.is_active()) => {
            Some(Message::OpenHistoryUrl)
        }

        _ => None,
    }
}
