//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget
//! lives in snip-tui's widgets/confirm_dialog.rs.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Button labels with the message each one sends; the first confirms
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Ask before deleting the short URL `code`
    pub fn delete_url(code: &str) -> Self {
        Self::new(
            format!("Delete /{code}?"),
            "Are you sure you want to delete this URL? This action cannot be undone.",
            vec![
                (
                    "Delete",
                    Message::ConfirmDelete {
                        code: code.to_string(),
                    },
                ),
                ("Cancel", Message::CancelDelete),
            ],
        )
    }

    /// Message sent when the user confirms
    pub fn confirm_message(&self) -> Option<Message> {
        self.options.first().map(|(_, msg)| msg.clone())
    }

    /// Message sent when the user declines
    pub fn cancel_message(&self) -> Option<Message> {
        self.options.last().map(|(_, msg)| msg.clone())
    }
}
