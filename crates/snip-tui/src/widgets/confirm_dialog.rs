//! Confirmation dialog widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

// Re-export state from app layer
pub use snip_app::confirm_dialog::ConfirmDialogState;

use crate::layout::centered_rect;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 9;

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    /// `[y] First  [n] Last`: the first option confirms, the last declines
    fn buttons(&self) -> Line<'static> {
        let first = self.state.options.first().map(|(label, _)| label.clone());
        let last = self.state.options.last().map(|(label, _)| label.clone());

        let mut spans = Vec::new();
        if let Some(label) = first {
            spans.push(Span::styled("[y] ", styles::text_muted()));
            spans.push(Span::styled(
                label,
                styles::status_red().add_modifier(Modifier::BOLD),
            ));
        }
        if let Some(label) = last {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("[n] ", styles::text_muted()));
            spans.push(Span::styled(
                label,
                styles::text_primary().add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);

        // Clear the area behind the modal
        Clear.render(modal_area, buf);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [_, message_area, _, buttons_area] = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(styles::status_yellow())
            .render(message_area, buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(buttons_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_delete_dialog_renders() {
        let mut term = TestTerminal::new();
        let state = ConfirmDialogState::delete_url("abc123");
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Delete /abc123?"));
        assert!(term.buffer_contains("Are you sure you want to delete this URL?"));
        assert!(term.buffer_contains("cannot be undone."));
        assert!(term.buffer_contains("[y] Delete"));
        assert!(term.buffer_contains("[n] Cancel"));
    }

    #[test]
    fn test_dialog_fits_small_terminal() {
        let mut term = TestTerminal::with_size(30, 6);
        let state = ConfirmDialogState::delete_url("abc");
        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Delete"));
    }
}
