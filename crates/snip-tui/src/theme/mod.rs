//! Centralized theme for the TUI.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `icons` - Unicode glyphs with Nerd Font alternatives

pub mod icons;
pub mod palette;
pub mod styles;
