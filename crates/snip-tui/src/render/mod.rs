//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use snip_app::state::{AppState, View};

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state, never changes it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    let header = widgets::MainHeader::new(state.endpoints.api_base(), icons)
        .view(state.view)
        .show_history(state.history_enabled());
    frame.render_widget(header, areas.header);

    // Exactly one view; the result view only while a result exists
    match (state.view, &state.current_result) {
        (View::Result, Some(result)) => {
            let result_view = widgets::ResultView::new(result, &state.result_view, icons);
            frame.render_widget(result_view, areas.body);
        }
        (View::History, _) => {
            let table = widgets::HistoryTable::new(&state.history, &state.endpoints, icons);
            frame.render_widget(table, areas.body);
        }
        _ => {
            let form = widgets::UrlForm::new(&state.form, &state.shorten, icons);
            frame.render_widget(form, areas.body);
        }
    }

    if let Some(status) = &state.status {
        let line = Line::styled(format!(" {}", status.text), styles::status_green());
        frame.render_widget(Paragraph::new(line), areas.status);
    }

    frame.render_widget(widgets::HelpBar::new(state), areas.help);

    // Modal overlay on top of the active view
    if let Some(dialog_state) = &state.confirm_dialog {
        frame.render_widget(widgets::ConfirmDialog::new(dialog_state), area);
    }
}
