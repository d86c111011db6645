//! Result view widget: the short URL just created and its QR code

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use snip_app::result_view::ResultViewState;
use snip_core::{format_timestamp, ShortenResponse};
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, styles};

/// Narrowest details column kept when the QR preview is placed beside it
const MIN_DETAILS_WIDTH: u16 = 36;

/// Width of the label column ("Original URL" plus padding)
const LABEL_WIDTH: usize = 14;

pub struct ResultView<'a> {
    result: &'a ShortenResponse,
    view: &'a ResultViewState,
    icons: IconSet,
}

impl<'a> ResultView<'a> {
    pub fn new(result: &'a ShortenResponse, view: &'a ResultViewState, icons: IconSet) -> Self {
        Self { result, view, icons }
    }

    fn field(label: &str, value: Span<'a>) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label:<LABEL_WIDTH$}"), styles::label()),
            value,
        ])
    }

    fn details_lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::default()];

        let mut short = Self::field(
            "Short URL",
            Span::styled(self.result.short_url.clone(), styles::link()),
        );
        short.push_span(Span::raw("  "));
        if self.view.is_copied() {
            short.push_span(Span::styled(
                format!("{} Copied!", self.icons.check()),
                styles::status_green(),
            ));
        } else {
            short.push_span(Span::styled("[c] Copy", styles::keybinding()));
        }
        lines.push(short);

        lines.push(Self::field(
            "Original URL",
            Span::styled(self.result.original_url.clone(), styles::text_secondary()),
        ));
        lines.push(Self::field(
            "Code",
            Span::styled(self.result.code.clone(), styles::text_primary()),
        ));
        if let Some(expires_at) = &self.result.expires_at {
            lines.push(Self::field(
                "Expires",
                Span::styled(format_timestamp(expires_at), styles::status_yellow()),
            ));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("[o]", styles::keybinding()),
            Span::styled(" Test Link   ", styles::text_secondary()),
            Span::styled("[s]", styles::keybinding()),
            Span::styled(" Download QR Code", styles::text_secondary()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("[n]", styles::keybinding()),
            Span::styled(" Shorten Another URL", styles::text_secondary()),
        ]));
        lines
    }
}

impl Widget for ResultView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Span::styled(
            format!(" {} URL Shortened Successfully! ", self.icons.check()),
            styles::status_green(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let qr_lines: Vec<&str> = self
            .view
            .qr_preview
            .as_deref()
            .map(|qr| qr.lines().collect())
            .unwrap_or_default();
        let qr_width = qr_lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;

        let mut lines = self.details_lines();

        let fits_beside = qr_width > 0 && inner.width >= qr_width + MIN_DETAILS_WIDTH + 2;
        if !fits_beside {
            lines.push(Line::default());
            lines.push(if qr_lines.is_empty() {
                Line::styled("QR code unavailable", styles::text_muted())
            } else {
                Line::styled("Widen the terminal to preview the QR code", styles::text_muted())
            });
            Paragraph::new(lines).render(padded(inner), buf);
            return;
        }

        let [left, right] =
            Layout::horizontal([Constraint::Min(MIN_DETAILS_WIDTH), Constraint::Length(qr_width)])
                .spacing(2)
                .areas(padded(inner));
        Paragraph::new(lines).render(left, buf);

        let qr = Paragraph::new(
            qr_lines
                .into_iter()
                .map(|l| Line::styled(l, styles::text_primary()))
                .collect::<Vec<_>>(),
        );
        qr.render(right, buf);
    }
}

fn padded(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}
