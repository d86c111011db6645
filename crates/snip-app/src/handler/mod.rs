//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per view
//! - `form`: Submission form handlers
//! - `history`: History view handlers

pub(crate) mod form;
pub(crate) mod history;
pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

use snip_core::ShortenRequest;

use crate::message::{CopyTarget, Message};

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// `POST /api/shorten`; answered with `Message::ShortenCompleted`
    ShortenUrl { request: ShortenRequest },

    /// `GET /api/history`; answered with `Message::HistoryLoaded`
    FetchHistory,

    /// `GET /api/urls/{code}`; answered with `Message::DetailsLoaded`
    FetchDetails { code: String },

    /// `DELETE /api/urls/{code}`; answered with `Message::UrlDeleted`
    DeleteUrl { code: String },

    /// Copy text to the system clipboard. Only success is reported back.
    CopyToClipboard { text: String, target: CopyTarget },

    /// Open a URL in the browser.
    ///
    /// Fire-and-forget OS call. If `browser` is empty, the platform default
    /// opener is used.
    OpenBrowser { url: String, browser: String },

    /// Render `data` as a QR code PNG named after `code` inside `dir`
    SaveQrCode {
        data: String,
        code: String,
        dir: PathBuf,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
