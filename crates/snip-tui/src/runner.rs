//! Main TUI runner - entry point and event loop

use snip_app::config::Settings;
use snip_app::Engine;
use snip_client::ShortenerApi;
use snip_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI against `api` until the user quits
///
/// Must be called from within a tokio runtime; background requests run on it
/// while this loop blocks on terminal input.
pub async fn run<A>(api: A, settings: Settings) -> Result<()>
where
    A: ShortenerApi + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Starting TUI against {} (history: {})",
        api.endpoints().api_base(),
        settings.ui.show_history
    );
    let mut engine = Engine::new(api, settings);

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut engine);
    ratatui::restore();

    info!("TUI exited");
    result
}

/// Main event loop
fn run_loop<A>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<A>) -> Result<()>
where
    A: ShortenerApi + Sync + 'static,
{
    while !engine.should_quit() {
        // Answers from background tasks and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
