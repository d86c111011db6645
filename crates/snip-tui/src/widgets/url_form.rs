//! URL submission form widget
//!
//! Renders the URL input, the collapsible advanced section (custom code,
//! expiration), the submit button and any error for the last attempt.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};
use snip_app::form::{FormField, FormState};
use snip_app::shorten::ShortenState;
use unicode_width::UnicodeWidthChar;

use crate::theme::{icons::IconSet, styles};

pub struct UrlForm<'a> {
    form: &'a FormState,
    shorten: &'a ShortenState,
    icons: IconSet,
}

impl<'a> UrlForm<'a> {
    pub fn new(form: &'a FormState, shorten: &'a ShortenState, icons: IconSet) -> Self {
        Self {
            form,
            shorten,
            icons,
        }
    }

    fn submit_label(&self) -> &'static str {
        if self.shorten.loading {
            "Shortening..."
        } else {
            "Shorten URL"
        }
    }
}

impl Widget for UrlForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(" Shorten a URL ", styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        let mut rows = Rows::new(inner);

        self.render_field(FormField::Url, &mut rows, buf);
        rows.skip();

        let (chevron, toggle) = if self.form.show_advanced {
            (self.icons.chevron_down(), "Hide Advanced Options")
        } else {
            (self.icons.chevron_right(), "Show Advanced Options")
        };
        rows.line(
            buf,
            Line::from(vec![
                Span::styled(format!("{chevron} {toggle}"), styles::accent()),
                Span::styled("  (Ctrl+A)", styles::text_muted()),
            ]),
        );
        rows.skip();

        if self.form.show_advanced {
            self.render_field(FormField::CustomCode, &mut rows, buf);
            rows.line(
                buf,
                Line::styled(
                    "3-20 characters: letters, numbers, hyphens",
                    styles::text_muted(),
                ),
            );
            rows.skip();
            self.render_field(FormField::Expiration, &mut rows, buf);
            rows.line(
                buf,
                Line::styled(
                    "Local time, leave empty to never expire",
                    styles::text_muted(),
                ),
            );
            rows.skip();
        }

        let button_style = if self.shorten.loading {
            styles::text_muted().add_modifier(Modifier::BOLD)
        } else {
            styles::focused_selected()
        };
        rows.line(
            buf,
            Line::from(vec![
                Span::styled(format!(" {} ", self.submit_label()), button_style),
                Span::styled("  Enter", styles::keybinding()),
            ]),
        );

        let error = self
            .form
            .validation_error
            .as_deref()
            .or(self.shorten.error.as_deref());
        if let Some(message) = error {
            rows.skip();
            rows.line(
                buf,
                Line::from(vec![
                    Span::styled(format!("{} ", self.icons.alert()), styles::status_red()),
                    Span::styled(message, styles::status_red()),
                ]),
            );
        }
    }
}

impl UrlForm<'_> {
    fn render_field(&self, field: FormField, rows: &mut Rows, buf: &mut Buffer) {
        let focused = self.form.focus == field;
        let label_style = if focused {
            styles::accent_bold()
        } else {
            styles::label()
        };
        rows.line(buf, Line::styled(field.label(), label_style));

        let Some(area) = rows.next() else {
            return;
        };
        let style = styles::input(focused);
        buf.set_style(area, style);

        let value = self.form.value(field);
        let text_width = area.width.saturating_sub(2) as usize;
        let line = if value.is_empty() {
            Line::from(vec![
                Span::raw(" "),
                Span::styled(field.placeholder(), style.patch(styles::text_muted())),
            ])
        } else {
            let mut spans = vec![
                Span::raw(" "),
                Span::styled(visible_tail(value, text_width), style),
            ];
            if focused && !self.shorten.loading {
                spans.push(Span::styled("▏", style.patch(styles::accent())));
            }
            Line::from(spans)
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// Keep the end of `text` that fits in `width` columns, so the caret stays visible
pub fn visible_tail(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    text[start..].to_string()
}

/// Hands out single-row areas top to bottom until the area is used up
struct Rows {
    area: Rect,
    y: u16,
}

impl Rows {
    fn new(area: Rect) -> Self {
        Self { area, y: area.y }
    }

    fn next(&mut self) -> Option<Rect> {
        if self.y >= self.area.bottom() {
            return None;
        }
        let row = Rect {
            y: self.y,
            height: 1,
            ..self.area
        };
        self.y += 1;
        Some(row)
    }

    fn skip(&mut self) {
        self.y += 1;
    }

    fn line(&mut self, buf: &mut Buffer, line: Line<'_>) {
        if let Some(row) = self.next() {
            buf.set_line(row.x, row.y, &line, row.width);
        }
    }
}
