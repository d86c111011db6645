//! Engine - shared orchestration for the TUI runner
//!
//! The Engine owns the TEA state, the message channel and the API client.
//! Frontends feed it messages (keys, ticks) and render `engine.state`.

use std::sync::Arc;

use snip_client::ShortenerApi;
use tokio::sync::mpsc;
use tracing::debug;

use crate::actions::handle_action;
use crate::config::Settings;
use crate::handler;
use crate::message::Message;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for snip.
///
/// Encapsulates:
/// - TEA state management
/// - Message channel
/// - The backend API client shared by background tasks
pub struct Engine<A> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, background tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    api: Arc<A>,
}

impl<A> Engine<A>
where
    A: ShortenerApi + Sync + 'static,
{
    /// Create a new Engine around an API client.
    ///
    /// Must be called inside a tokio runtime: it spawns the signal handler.
    pub fn new(api: A, settings: Settings) -> Self {
        let state = AppState::with_settings(settings, api.endpoints().clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            api: Arc::new(api),
        }
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Follow-up messages are processed immediately; actions are spawned as
    /// background tasks that answer through the channel.
    pub fn process_message(&mut self, message: Message) {
        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, m);

            if let Some(action) = result.action {
                debug!("Dispatching {:?}", action);
                handle_action(action, self.msg_tx.clone(), self.api.clone());
            }

            msg = result.message;
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from a background task or signal
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }
}
