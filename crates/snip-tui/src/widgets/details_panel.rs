//! Details panel for one history row
//!
//! Shows what `GET /api/urls/{code}` returned when the user asked. Values
//! are a snapshot of that moment and are not refreshed on their own.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use snip_app::history::DetailsPanel as DetailsPanelState;
use snip_core::format_timestamp;

use crate::theme::{icons::IconSet, styles};

pub struct DetailsPanel<'a> {
    panel: &'a DetailsPanelState,
    icons: IconSet,
}

impl<'a> DetailsPanel<'a> {
    pub fn new(panel: &'a DetailsPanelState, icons: IconSet) -> Self {
        Self { panel, icons }
    }

    fn field(label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), styles::label()),
            Span::styled(value, styles::text_primary()),
        ])
    }

    fn lines(&self) -> Vec<Line<'static>> {
        if self.panel.loading {
            return vec![Line::styled("Loading details...", styles::text_secondary())];
        }
        if let Some(error) = &self.panel.error {
            return vec![Line::styled(
                format!("{} {}", self.icons.alert(), error),
                styles::status_red(),
            )];
        }
        let Some(details) = &self.panel.details else {
            return Vec::new();
        };

        let never = || "Never".to_string();
        vec![
            Self::field("Clicks", details.click_count.to_string()),
            Self::field(
                "Last clicked",
                details
                    .last_clicked
                    .as_ref()
                    .map(format_timestamp)
                    .unwrap_or_else(never),
            ),
            Self::field("Created", format_timestamp(&details.created_at)),
            Self::field(
                "Expires",
                details
                    .expires_at
                    .as_ref()
                    .map(format_timestamp)
                    .unwrap_or_else(never),
            ),
        ]
    }
}

impl Widget for DetailsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Line::from(vec![
            Span::styled(
                format!(" {} /{} ", self.icons.info(), self.panel.code),
                styles::accent(),
            ),
            Span::styled("Esc to close ", styles::text_muted()),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines()).render(inner, buf);
    }
}
