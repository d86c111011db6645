//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - characters that work in all terminals
//! - `IconMode::NerdFonts` - Nerd Font glyphs (requires Nerd Font installed)

use snip_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn link(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c1}", // nf-fa-link
            IconMode::Unicode => "\u{1f517}",  // 🔗
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    /// Badge for active links
    pub fn active(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f058}", // nf-fa-check_circle
            IconMode::Unicode => "\u{2705}",   // ✅
        }
    }

    /// Badge for expired (and unrecognized) links
    pub fn expired(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f017}", // nf-fa-clock_o
            IconMode::Unicode => "\u{23f0}",   // ⏰
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn refresh(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f021}", // nf-fa-refresh
            IconMode::Unicode => "\u{21bb}",   // ↻
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    pub fn chevron_down(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f078}", // nf-fa-chevron_down
            IconMode::Unicode => "\u{2304}",   // ⌄
        }
    }

    pub fn info(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f05a}", // nf-fa-info_circle
            IconMode::Unicode => "\u{2139}",   // ℹ
        }
    }

    pub fn history(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f1da}", // nf-fa-history
            IconMode::Unicode => "\u{231b}",   // ⌛
        }
    }
}
