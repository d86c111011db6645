//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use snip_core::{ShortenResponse, UrlDetails, UrlHistoryItem};

use crate::form::FormField;
use crate::input_key::InputKey;

/// Where a clipboard copy was requested from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyTarget {
    /// The short URL on the result view
    Result,
    /// A history row, identified by its short code
    History { code: String },
}

/// All possible messages/actions in the application
///
/// Background results carry errors as display strings: they are only ever
/// shown to the user.
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (transient indicators)
    Tick,

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Open the history view and fetch the list
    ShowHistory,
    /// Leave the history view for the view it was opened from
    CloseHistory,
    /// Return from the result view to an empty form
    ResetResult,

    // ─────────────────────────────────────────────────────────
    // Form
    // ─────────────────────────────────────────────────────────
    /// Replace the text of a form field
    FormInput { field: FormField, text: String },
    FormFocusNext,
    FormFocusPrev,
    ToggleAdvanced,
    SubmitForm,

    // ─────────────────────────────────────────────────────────
    // Result view
    // ─────────────────────────────────────────────────────────
    CopyResultUrl,
    OpenResultUrl,
    SaveResultQr,

    // ─────────────────────────────────────────────────────────
    // History view
    // ─────────────────────────────────────────────────────────
    HistoryUp,
    HistoryDown,
    HistoryPageUp,
    HistoryPageDown,
    HistoryTop,
    HistoryBottom,
    RefreshHistory,
    CopyHistoryUrl,
    SaveHistoryQr,
    OpenHistoryUrl,
    /// Delete the selected row (asks first when configured to)
    RequestDelete,
    /// Delete the row the dialog was opened for
    ConfirmDelete { code: String },
    CancelDelete,
    /// Fetch and show details for the selected row
    ShowDetails,
    HideDetails,

    // ─────────────────────────────────────────────────────────
    // Background results
    // ─────────────────────────────────────────────────────────
    ShortenCompleted {
        result: Result<ShortenResponse, String>,
    },
    HistoryLoaded {
        result: Result<Vec<UrlHistoryItem>, String>,
    },
    DetailsLoaded {
        code: String,
        result: Result<UrlDetails, String>,
    },
    UrlDeleted {
        code: String,
        result: Result<(), String>,
    },
    /// Text reached the clipboard
    Copied { target: CopyTarget },
    /// QR code PNG written to disk
    QrSaved { path: PathBuf },
}
