//! Key hints for the active view, one row at the bottom of the screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use snip_app::state::AppState;
use snip_app::View;

use crate::theme::styles;

pub struct HelpBar<'a> {
    state: &'a AppState,
}

impl<'a> HelpBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let state = self.state;
        if state.confirm_dialog.is_some() {
            return vec![("y/Enter", "confirm"), ("n/Esc", "cancel")];
        }

        let mut hints = match state.view {
            View::Form => {
                let mut hints = vec![
                    ("Enter", "shorten"),
                    ("Tab", "next field"),
                    ("Ctrl+A", "advanced"),
                    ("Ctrl+U", "clear"),
                ];
                if state.history_enabled() {
                    hints.push(("Ctrl+L", "history"));
                }
                hints.push(("Esc", "quit"));
                return hints;
            }
            View::Result => {
                let mut hints = vec![
                    ("c", "copy"),
                    ("o", "open"),
                    ("s", "save QR"),
                    ("n", "new"),
                ];
                if state.history_enabled() {
                    hints.push(("h", "history"));
                }
                hints
            }
            View::History if state.history.details.is_some() => {
                vec![("Esc", "close details"), ("↑↓", "select"), ("r", "refresh")]
            }
            View::History => {
                vec![("↑↓", "select"), ("r", "refresh"), ("b/Esc", "back")]
            }
        };
        hints.push(("q", "quit"));
        hints
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (idx, (key, action)) in self.hints().into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
