//! Headless command execution

use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use snip_app::config::Settings;
use snip_client::{qr, ShortenerApi};
use snip_core::build_shorten_request;
use snip_core::prelude::*;

use super::HeadlessOutput;

/// Commands that run one request without the TUI
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Shorten a URL (`https://` is added when no scheme is given)
    Shorten {
        url: String,

        /// Custom short code (3-20 letters, numbers, hyphens)
        #[arg(long)]
        code: Option<String>,

        /// Local expiration time, e.g. "2030-01-31 18:00"
        #[arg(long)]
        expires: Option<String>,
    },

    /// List URLs with their active/expired status
    History,

    /// List every stored URL
    List,

    /// Show one URL's details
    Info { code: String },

    /// Delete a short URL
    Delete { code: String },

    /// Save the QR code of a short URL as `qr-code-{code}.png`
    Qr {
        code: String,

        /// Target directory (default: the configured download directory)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Check whether the backend answers
    Ping,
}

/// Run `command` against `api` and return what should be printed
pub async fn execute<A: ShortenerApi>(
    api: &A,
    command: Command,
    settings: &Settings,
) -> Result<HeadlessOutput> {
    debug!("Headless command: {:?}", command);

    let output = match command {
        Command::Shorten { url, code, expires } => {
            let request = build_shorten_request(
                &url,
                code.as_deref().unwrap_or_default(),
                expires.as_deref().unwrap_or_default(),
                Utc::now(),
            )?;
            HeadlessOutput::Shortened(api.create_short_url(&request).await?)
        }
        Command::History => HeadlessOutput::History(api.get_url_history().await?),
        Command::List => HeadlessOutput::Urls(api.get_all_urls().await?),
        Command::Info { code } => HeadlessOutput::Details(api.get_url_details(&code).await?),
        Command::Delete { code } => {
            api.delete_url(&code).await?;
            HeadlessOutput::Deleted { deleted: code }
        }
        Command::Qr { code, out } => {
            let dir = out.unwrap_or_else(|| settings.behavior.resolved_download_dir());
            let short_url = api.short_url(&code);
            let path = qr::save_png(&short_url, &code, &dir)?;
            HeadlessOutput::QrSaved {
                code,
                short_url,
                path,
            }
        }
        Command::Ping => HeadlessOutput::Ping {
            reachable: api.ping().await,
        },
    };

    Ok(output)
}

/// Execute one command and print its JSON document to stdout
pub async fn run_headless<A: ShortenerApi>(
    api: &A,
    command: Command,
    settings: &Settings,
) -> Result<()> {
    info!("snip starting in HEADLESS mode");

    let result = execute(api, command, settings).await;
    match result {
        Ok(output) => output.emit(),
        Err(e) if e.is_recoverable() => {
            warn!("Headless command failed: {}", e);
            Err(e)
        }
        Err(e) => {
            error!("Headless command failed: {:?}", e);
            Err(e)
        }
    }
}
