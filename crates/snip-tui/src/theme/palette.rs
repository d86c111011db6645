//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Active links, success
pub const STATUS_RED: Color = Color::Red; // Errors
pub const STATUS_YELLOW: Color = Color::Yellow; // Expired links, warnings
pub const STATUS_BLUE: Color = Color::Blue; // Links

// --- Rows ---
pub const SELECTED_ROW_BG: Color = Color::Rgb(30, 30, 40);
pub const INPUT_BG: Color = Color::Rgb(40, 40, 50);
pub const INPUT_FOCUSED_BG: Color = Color::Rgb(60, 60, 80);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_input_is_distinct() {
        assert_ne!(INPUT_BG, INPUT_FOCUSED_BG);
    }

    #[test]
    fn test_status_colors_are_distinct() {
        assert_ne!(STATUS_GREEN, STATUS_YELLOW);
        assert_ne!(STATUS_RED, STATUS_YELLOW);
    }
}
