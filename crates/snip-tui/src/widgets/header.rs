//! Header bar widget
//!
//! Provides the main header with the app title, the backend origin and the
//! active view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use snip_app::state::View;

use crate::theme::{icons::IconSet, palette, styles};

/// Main header showing app title, backend origin and the view tabs
pub struct MainHeader<'a> {
    api_base: &'a str,
    view: View,
    show_history: bool,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(api_base: &'a str, icons: IconSet) -> Self {
        Self {
            api_base,
            view: View::Form,
            show_history: true,
            icons,
        }
    }

    pub fn view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    /// Hide the History tab when the history view is disabled
    pub fn show_history(mut self, show: bool) -> Self {
        self.show_history = show;
        self
    }

    fn tabs(&self) -> Line<'static> {
        let mut tabs = vec![("Shorten", View::Form), ("Result", View::Result)];
        if self.show_history {
            tabs.push(("History", View::History));
        }

        let mut spans = Vec::new();
        for (idx, (label, view)) in tabs.into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            let style = if view == self.view {
                styles::accent_bold()
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(label, style));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.link(), styles::accent()),
            Span::raw(" "),
            Span::styled(
                "URL Shortener",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.api_base.to_string(), styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Tabs go right-aligned when they do not collide with the title
        let tabs = self.tabs();
        let tabs_width = tabs.width() as u16;
        if left_width + tabs_width + 2 <= inner.width {
            let x = inner.x + inner.width - tabs_width;
            buf.set_line(x, inner.y, &tabs, tabs_width);
        }
    }
}
