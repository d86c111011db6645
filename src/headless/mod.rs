//! Headless mode - one backend request per invocation, JSON on stdout
//!
//! Each subcommand sends a single request and prints exactly one JSON
//! document, so the client can be scripted without parsing the TUI.
//!
//! # Example Output
//!
//! ```json
//! {"short_url":"http://localhost:8080/abc123","original_url":"https://example.com","code":"abc123"}
//! {"deleted":"abc123"}
//! {"reachable":true}
//! ```
//!
//! Failures go to stderr and the process exits non-zero.

pub mod runner;

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;
use snip_core::prelude::*;
use snip_core::{ShortenResponse, UrlDetails, UrlHistoryItem};

pub use runner::{execute, run_headless, Command};

/// Result of a headless command, serialized as-is
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HeadlessOutput {
    /// `shorten`: the backend's reply
    Shortened(ShortenResponse),

    /// `history`: rows with their status, in backend order
    History(Vec<UrlHistoryItem>),

    /// `list`: every stored URL
    Urls(Vec<UrlDetails>),

    /// `info`
    Details(UrlDetails),

    Deleted { deleted: String },

    QrSaved {
        code: String,
        short_url: String,
        path: PathBuf,
    },

    Ping { reachable: bool },
}

impl HeadlessOutput {
    /// Write the document followed by a newline
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Write the document to stdout
    pub fn emit(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout).map_err(|e| {
            error!("Failed to write headless output: {}", e);
            e
        })
    }
}
