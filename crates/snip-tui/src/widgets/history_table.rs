//! # History Table Widget
//!
//! Renders every short URL the backend knows about, with a status badge,
//! click count and the actions available for each row. The selected row
//! gets a detail line with the full original URL underneath the table.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};
use snip_app::history::HistoryState;
use snip_client::Endpoints;
use snip_core::{format_timestamp, truncate_url, UrlHistoryItem};

use super::DetailsPanel;
use crate::theme::{icons::IconSet, styles};

// ── Column widths (characters) ────────────────────────────────────────────────

/// Truncated original URL: 40 chars plus the ellipsis.
const COL_ORIGINAL: u16 = 43;

/// Short code column width.
const COL_CODE: u16 = 12;

/// Local date + time, `YYYY-MM-DD HH:MM`.
const COL_CREATED: u16 = 16;

const COL_CLICKS: u16 = 6;

/// Badge icon plus capitalized status word.
const COL_STATUS: u16 = 11;

/// "Copy QR Delete Open"
const COL_ACTIONS: u16 = 19;

// Short URL column gets the remaining space.

/// Height of the details panel below the table.
const DETAILS_HEIGHT: u16 = 6;

pub struct HistoryTable<'a> {
    history: &'a HistoryState,
    endpoints: &'a Endpoints,
    icons: IconSet,
}

impl<'a> HistoryTable<'a> {
    pub fn new(history: &'a HistoryState, endpoints: &'a Endpoints, icons: IconSet) -> Self {
        Self {
            history,
            endpoints,
            icons,
        }
    }

    fn title(&self) -> Line<'static> {
        let count = if self.history.is_ready() {
            format!(" ({})", self.history.items.len())
        } else {
            String::new()
        };
        Line::from(vec![
            Span::styled(
                format!(" {} URL History", self.icons.history()),
                styles::accent_bold(),
            ),
            Span::styled(format!("{count} "), styles::text_muted()),
        ])
    }

    /// Actions offered for a row. Open only exists for active links.
    fn row_actions(&self, item: &UrlHistoryItem) -> Line<'static> {
        if self.history.is_copied(item.short_code()) {
            return Line::styled(
                format!("{} Copied!", self.icons.check()),
                styles::status_green(),
            );
        }
        let mut actions = String::from("Copy QR Delete");
        if item.is_active() {
            actions.push_str(" Open");
        }
        Line::styled(actions, styles::text_secondary())
    }

    fn row(&self, item: &UrlHistoryItem) -> Row<'static> {
        let (icon, label, badge_style) = styles::status_badge(item.status, &self.icons);
        let details = &item.details;

        Row::new(vec![
            Cell::from(truncate_url(&details.original_url)).style(styles::text_primary()),
            Cell::from(self.endpoints.short_url(&details.short_code)).style(styles::link()),
            Cell::from(details.short_code.clone()).style(styles::text_secondary()),
            Cell::from(format_timestamp(&details.created_at)).style(styles::text_muted()),
            Cell::from(Line::from(details.click_count.to_string()).alignment(Alignment::Right)),
            Cell::from(Line::styled(format!("{icon} {label}"), badge_style)),
            Cell::from(self.row_actions(item)),
        ])
    }

    fn render_message(area: Rect, buf: &mut Buffer, lines: Vec<Line<'static>>) {
        let height = lines.len() as u16;
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(middle, buf);
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(vec![
            "Original URL",
            "Short URL",
            "Code",
            "Created",
            "Clicks",
            "Status",
            "Actions",
        ])
        .style(styles::label());

        let rows: Vec<Row> = self.history.items.iter().map(|i| self.row(i)).collect();
        let widths = [
            Constraint::Length(COL_ORIGINAL),
            Constraint::Min(20),
            Constraint::Length(COL_CODE),
            Constraint::Length(COL_CREATED),
            Constraint::Length(COL_CLICKS),
            Constraint::Length(COL_STATUS),
            Constraint::Length(COL_ACTIONS),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(styles::selected_row())
            .highlight_symbol(format!("{} ", self.icons.chevron_right()));

        let mut state = TableState::default().with_selected(Some(self.history.selected));
        StatefulWidget::render(table, area, buf, &mut state);
    }

    /// Full original URL and the keys for the selected row
    fn render_selection(&self, area: Rect, buf: &mut Buffer) {
        let Some(item) = self.history.selected_item() else {
            return;
        };

        let mut keys = vec![
            Span::styled("[c]", styles::keybinding()),
            Span::styled(" Copy  ", styles::text_secondary()),
            Span::styled("[s]", styles::keybinding()),
            Span::styled(" QR Code  ", styles::text_secondary()),
            Span::styled("[d]", styles::keybinding()),
            Span::styled(" Delete  ", styles::text_secondary()),
            Span::styled("[i]", styles::keybinding()),
            Span::styled(" Details", styles::text_secondary()),
        ];
        if item.is_active() {
            keys.push(Span::styled("  [o]", styles::keybinding()));
            keys.push(Span::styled(" Open", styles::text_secondary()));
        }

        let lines = vec![
            Line::from(vec![
                Span::styled("Full URL: ", styles::label()),
                Span::styled(item.details.original_url.clone(), styles::text_primary()),
            ]),
            Line::from(keys),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}

impl Widget for HistoryTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.history.loading {
            Self::render_message(
                inner,
                buf,
                vec![Line::styled("Loading history...", styles::text_secondary())],
            );
            return;
        }

        if let Some(error) = &self.history.error {
            Self::render_message(
                inner,
                buf,
                vec![
                    Line::styled(
                        format!("{} {}", self.icons.alert(), error),
                        styles::status_red(),
                    ),
                    Line::default(),
                    Line::styled("Press r to retry", styles::text_muted()),
                ],
            );
            return;
        }

        let action_error_height = u16::from(self.history.action_error.is_some());
        let details_height = if self.history.details.is_some() {
            DETAILS_HEIGHT
        } else {
            0
        };
        let [error_area, table_area, selection_area, details_area] = Layout::vertical([
            Constraint::Length(action_error_height),
            Constraint::Min(2),
            Constraint::Length(2),
            Constraint::Length(details_height),
        ])
        .areas(inner);

        if let Some(error) = &self.history.action_error {
            Paragraph::new(Line::styled(
                format!("{} {}", self.icons.alert(), error),
                styles::status_red(),
            ))
            .render(error_area, buf);
        }

        if self.history.items.is_empty() {
            Self::render_message(
                table_area,
                buf,
                vec![
                    Line::styled("No URLs created yet", styles::text_primary()),
                    Line::styled(
                        "Start by creating your first short URL!",
                        styles::text_muted(),
                    ),
                ],
            );
            return;
        }

        self.render_table(table_area, buf);
        self.render_selection(selection_area, buf);

        if let Some(panel) = &self.history.details {
            DetailsPanel::new(panel, self.icons).render(details_area, buf);
        }
    }
}
