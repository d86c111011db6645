//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use snip_core::LinkStatus;

use super::icons::IconSet;
use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn label() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

pub fn link() -> Style {
    Style::default()
        .fg(palette::STATUS_BLUE)
        .add_modifier(Modifier::UNDERLINED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection styles ---
pub fn selected_row() -> Style {
    Style::default()
        .bg(palette::SELECTED_ROW_BG)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - used for the focused button
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn input(focused: bool) -> Style {
    let bg = if focused {
        palette::INPUT_FOCUSED_BG
    } else {
        palette::INPUT_BG
    };
    Style::default().fg(palette::TEXT_PRIMARY).bg(bg)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Status badge mapping ---

/// Badge for a link status: `(icon, label, style)`.
///
/// Only `active` gets the affirmative icon; expired and any status the
/// backend may add later get the waiting icon.
pub fn status_badge(status: LinkStatus, icons: &IconSet) -> (&'static str, String, Style) {
    if status.is_active() {
        (icons.active(), status.label(), status_green())
    } else {
        (icons.expired(), status.label(), status_yellow())
    }
}
