//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Each action runs as its own tokio task and reports back through the
//! message channel. Nothing is cancelled; a result that arrives after the
//! user moved on is still applied to state.

use std::sync::Arc;

use snip_client::{browser, clipboard, qr, ShortenerApi};
use tokio::sync::mpsc;
use tracing::{error, warn};

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: Arc<A>)
where
    A: ShortenerApi + Sync + 'static,
{
    match action {
        UpdateAction::ShortenUrl { request } => {
            tokio::spawn(async move {
                let result = api
                    .create_short_url(&request)
                    .await
                    .map_err(|e| e.to_string());
                send(&msg_tx, Message::ShortenCompleted { result }).await;
            });
        }

        UpdateAction::FetchHistory => {
            tokio::spawn(async move {
                let result = api.get_url_history().await.map_err(|e| e.to_string());
                send(&msg_tx, Message::HistoryLoaded { result }).await;
            });
        }

        UpdateAction::FetchDetails { code } => {
            tokio::spawn(async move {
                let result = api.get_url_details(&code).await.map_err(|e| e.to_string());
                send(&msg_tx, Message::DetailsLoaded { code, result }).await;
            });
        }

        UpdateAction::DeleteUrl { code } => {
            tokio::spawn(async move {
                let result = api.delete_url(&code).await.map_err(|e| e.to_string());
                send(&msg_tx, Message::UrlDeleted { code, result }).await;
            });
        }

        UpdateAction::CopyToClipboard { text, target } => {
            tokio::spawn(async move {
                match clipboard::copy_to_clipboard(&text).await {
                    Ok(()) => send(&msg_tx, Message::Copied { target }).await,
                    // No confirmation on failure
                    Err(e) => warn!("Failed to copy: {}", e),
                }
            });
        }

        UpdateAction::OpenBrowser { url, browser: command } => {
            tokio::spawn(async move {
                if let Err(e) = browser::open_url(&url, &command) {
                    error!("Failed to open {}: {}", url, e);
                }
            });
        }

        UpdateAction::SaveQrCode { data, code, dir } => {
            tokio::spawn(async move {
                let saved =
                    tokio::task::spawn_blocking(move || qr::save_png(&data, &code, &dir)).await;
                match saved {
                    Ok(Ok(path)) => send(&msg_tx, Message::QrSaved { path }).await,
                    Ok(Err(e)) => warn!("Error generating QR code: {}", e),
                    Err(e) => error!("QR code task failed: {}", e),
                }
            });
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        // Receiver gone: the app is shutting down
        tracing::debug!("Dropping background result, message channel closed");
    }
}
