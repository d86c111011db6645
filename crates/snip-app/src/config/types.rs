//! Configuration types for snip

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snip_client::DEFAULT_API_BASE_URL;

/// All settings from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Backend location and request settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Origin of the JSON API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Origin used to display short links; falls back to `base_url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortlink_base_url: Option<String>,

    /// Per-request timeout in seconds. Unset means no client-side timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            shortlink_base_url: None,
            timeout_secs: None,
        }
    }
}

/// Icon display mode for the TUI
///
/// Controls whether icons use safe Unicode characters (default) or Nerd
/// Font glyphs (requires a Nerd Font installed in the terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Offer the history view. When false the app only switches between
    /// the form and the result.
    #[serde(default = "default_true")]
    pub show_history: bool,

    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_history: true,
            icons: IconMode::default(),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Where QR code PNGs are written. Defaults to the user's download dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,

    /// Browser command used to open links. Empty means the platform opener.
    #[serde(default)]
    pub browser: String,

    /// Ask before deleting a short URL
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            download_dir: None,
            browser: String::new(),
            confirm_delete: true,
        }
    }
}

impl BehaviorSettings {
    /// Configured download directory, else the user download dir, else cwd
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Command-line overrides for the API section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiOverrides {
    pub base_url: Option<String>,
    pub shortlink_base_url: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
