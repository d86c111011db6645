//! snip - A terminal client for a URL shortening service
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use snip::Command;
use snip_app::config::{load_settings_from, ApiOverrides};
use snip_core::prelude::*;

/// snip - Shorten URLs, share them as QR codes, and manage your links
#[derive(Parser, Debug)]
#[command(name = "snip", version)]
#[command(about = "A terminal client for a URL shortening service", long_about = None)]
struct Args {
    /// Backend API base URL (overrides SNIP_API_URL and the config file)
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Base URL short links are served from (defaults to the API base)
    #[arg(long, value_name = "URL", global = true)]
    link_base: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Run one request and print JSON instead of starting the TUI
    #[command(subcommand)]
    command: Option<Command>,
}

impl Args {
    fn overrides(&self) -> ApiOverrides {
        ApiOverrides {
            base_url: self.api_url.clone(),
            shortlink_base_url: self.link_base.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (to file, since the TUI owns stdout)
    snip_core::logging::init()?;

    let settings = load_settings_from(args.config.as_deref());
    let api = snip::connect(&settings, &args.overrides())?;

    match args.command {
        Some(command) => {
            if let Err(e) = snip::run_headless(&api, command, &settings).await {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Ok(())
        }
        None => snip::run(api, settings).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_starts_tui() {
        let args = Args::try_parse_from(["snip"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.overrides(), ApiOverrides::default());
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let args =
            Args::try_parse_from(["snip", "history", "--api-url", "https://api.example.com"])
                .unwrap();

        assert_eq!(args.command, Some(Command::History));
        assert_eq!(
            args.overrides().base_url.as_deref(),
            Some("https://api.example.com")
        );
    }

    #[test]
    fn test_shorten_options() {
        let args = Args::try_parse_from([
            "snip",
            "shorten",
            "example.com",
            "--code",
            "promo",
            "--expires",
            "2030-01-31 18:00",
        ])
        .unwrap();

        assert_eq!(
            args.command,
            Some(Command::Shorten {
                url: "example.com".to_string(),
                code: Some("promo".to_string()),
                expires: Some("2030-01-31 18:00".to_string()),
            })
        );
    }

    #[test]
    fn test_qr_out_dir() {
        let args = Args::try_parse_from(["snip", "qr", "abc", "--out", "/tmp/codes"]).unwrap();

        assert_eq!(
            args.command,
            Some(Command::Qr {
                code: "abc".to_string(),
                out: Some(PathBuf::from("/tmp/codes")),
            })
        );
    }

    #[test]
    fn test_info_requires_code() {
        assert!(Args::try_parse_from(["snip", "info"]).is_err());
    }
}
