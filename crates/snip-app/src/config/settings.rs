//! Settings loader for `config.toml` and endpoint resolution

use std::path::{Path, PathBuf};
use std::time::Duration;

use snip_client::Endpoints;
use snip_core::prelude::*;

use super::types::{ApiOverrides, Settings};

const CONFIG_FILENAME: &str = "config.toml";
const SNIP_DIR: &str = "snip";

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV: &str = "SNIP_API_URL";

/// Environment variable overriding `api.shortlink_base_url`
pub const SHORTLINK_BASE_URL_ENV: &str = "SNIP_SHORTLINK_BASE_URL";

/// `{config_dir}/snip/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SNIP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a config file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from an explicit path, or the default location
pub fn load_settings_from(config_path: Option<&Path>) -> Settings {
    match config_path {
        Some(path) => load_settings(path),
        None => match default_config_path() {
            Some(path) => load_settings(&path),
            None => {
                debug!("No config directory on this platform, using defaults");
                Settings::default()
            }
        },
    }
}

/// Resolve the API and short-link bases
///
/// Precedence per value: CLI override, then environment, then the config
/// file (which already carries the default).
pub fn resolve_endpoints(
    settings: &Settings,
    overrides: &ApiOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Endpoints> {
    let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

    let api_base = non_empty(overrides.base_url.clone())
        .or_else(|| non_empty(env(API_URL_ENV)))
        .unwrap_or_else(|| settings.api.base_url.clone());

    let shortlink_base = non_empty(overrides.shortlink_base_url.clone())
        .or_else(|| non_empty(env(SHORTLINK_BASE_URL_ENV)))
        .or_else(|| non_empty(settings.api.shortlink_base_url.clone()));

    let endpoints = Endpoints::new(&api_base, shortlink_base.as_deref())?;
    info!(
        "API base {}, short links on {}",
        endpoints.api_base(),
        endpoints.shortlink_base()
    );
    Ok(endpoints)
}

/// [`resolve_endpoints`] reading the process environment
pub fn resolve_endpoints_from_env(
    settings: &Settings,
    overrides: &ApiOverrides,
) -> Result<Endpoints> {
    resolve_endpoints(settings, overrides, |key| std::env::var(key).ok())
}

/// Client timeout from `api.timeout_secs`; zero counts as unset
pub fn request_timeout(settings: &Settings) -> Option<Duration> {
    settings
        .api
        .timeout_secs
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));

        assert_eq!(settings.api.base_url, "http://localhost:8080");
        assert!(settings.ui.show_history);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "https://api.example.com"
timeout_secs = 10

[ui]
show_history = false

[behavior]
browser = "firefox"
confirm_delete = false
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.api.base_url, "https://api.example.com");
        assert_eq!(settings.api.timeout_secs, Some(10));
        assert!(!settings.ui.show_history);
        assert_eq!(settings.behavior.browser, "firefox");
        assert!(!settings.behavior.confirm_delete);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.api.base_url, "http://localhost:8080");
        assert!(settings.behavior.confirm_delete);
    }

    #[test]
    fn test_load_settings_from_explicit_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://10.0.0.2:9000\"\n").unwrap();

        let settings = load_settings_from(Some(&path));
        assert_eq!(settings.api.base_url, "http://10.0.0.2:9000");
    }

    #[test]
    fn test_resolve_defaults() {
        let endpoints =
            resolve_endpoints(&Settings::default(), &ApiOverrides::default(), no_env).unwrap();
        assert_eq!(endpoints.api_base(), "http://localhost:8080");
        assert_eq!(endpoints.shortlink_base(), "http://localhost:8080");
    }

    #[test]
    fn test_resolve_file_shortlink_base() {
        let mut settings = Settings::default();
        settings.api.base_url = "https://api.example.com/".to_string();
        settings.api.shortlink_base_url = Some("https://ex.co/".to_string());

        let endpoints = resolve_endpoints(&settings, &ApiOverrides::default(), no_env).unwrap();
        assert_eq!(endpoints.api_base(), "https://api.example.com");
        assert_eq!(endpoints.short_url("abc"), "https://ex.co/abc");
    }

    #[test]
    fn test_resolve_env_beats_file() {
        let mut settings = Settings::default();
        settings.api.base_url = "https://file.example".to_string();

        let env: HashMap<&str, &str> = [
            (API_URL_ENV, "https://env.example"),
            (SHORTLINK_BASE_URL_ENV, "https://l.env.example"),
        ]
        .into_iter()
        .collect();

        let endpoints = resolve_endpoints(&settings, &ApiOverrides::default(), |k| {
            env.get(k).map(|v| v.to_string())
        })
        .unwrap();
        assert_eq!(endpoints.api_base(), "https://env.example");
        assert_eq!(endpoints.shortlink_base(), "https://l.env.example");
    }

    #[test]
    fn test_resolve_cli_beats_env() {
        let overrides = ApiOverrides {
            base_url: Some("https://cli.example".to_string()),
            shortlink_base_url: None,
        };
        let endpoints = resolve_endpoints(&Settings::default(), &overrides, |k| {
            (k == API_URL_ENV).then(|| "https://env.example".to_string())
        })
        .unwrap();
        assert_eq!(endpoints.api_base(), "https://cli.example");
        assert_eq!(endpoints.shortlink_base(), "https://cli.example");
    }

    #[test]
    fn test_resolve_empty_env_is_ignored() {
        let endpoints = resolve_endpoints(&Settings::default(), &ApiOverrides::default(), |_| {
            Some("  ".to_string())
        })
        .unwrap();
        assert_eq!(endpoints.api_base(), "http://localhost:8080");
    }

    #[test]
    fn test_resolve_invalid_base_is_error() {
        let overrides = ApiOverrides {
            base_url: Some("ftp://files.example".to_string()),
            shortlink_base_url: None,
        };
        let err = resolve_endpoints(&Settings::default(), &overrides, no_env).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
    }

    #[test]
    #[serial]
    fn test_resolve_from_process_env() {
        std::env::set_var(API_URL_ENV, "http://127.0.0.1:9999/");
        std::env::remove_var(SHORTLINK_BASE_URL_ENV);

        let endpoints =
            resolve_endpoints_from_env(&Settings::default(), &ApiOverrides::default()).unwrap();

        std::env::remove_var(API_URL_ENV);
        assert_eq!(endpoints.api_base(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_request_timeout() {
        let mut settings = Settings::default();
        assert_eq!(request_timeout(&settings), None);

        settings.api.timeout_secs = Some(0);
        assert_eq!(request_timeout(&settings), None);

        settings.api.timeout_secs = Some(15);
        assert_eq!(request_timeout(&settings), Some(Duration::from_secs(15)));
    }
}
