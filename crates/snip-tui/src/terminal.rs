//! Terminal setup and restoration

use tracing::error;

/// Install a panic hook that restores the terminal
///
/// The panic is also written to the log file, since the alternate screen
/// swallows anything printed while the TUI is up.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        error!("snip panicked: {}", panic_info);
        ratatui::restore();
        original_hook(panic_info);
    }));
}
