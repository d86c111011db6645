//! snip - A terminal client for a URL shortening service
//!
//! The binary resolves configuration once at startup and then either runs
//! the interactive TUI ([`run`]) or a single headless command
//! ([`headless::run_headless`]).

pub mod headless;

use snip_app::config::{request_timeout, resolve_endpoints_from_env, ApiOverrides, Settings};
use snip_client::HttpClient;
use snip_core::prelude::*;

pub use headless::{run_headless, Command};

/// Build the backend client from settings, environment, and CLI overrides
pub fn connect(settings: &Settings, overrides: &ApiOverrides) -> Result<HttpClient> {
    let endpoints = resolve_endpoints_from_env(settings, overrides)
        .context("Failed to resolve backend endpoints")?;
    HttpClient::with_timeout(endpoints, request_timeout(settings))
}

/// Run the interactive TUI until the user quits
pub async fn run(api: HttpClient, settings: Settings) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let result = snip_tui::run(api, settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    result
}
