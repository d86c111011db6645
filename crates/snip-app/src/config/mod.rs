//! Configuration file parsing for snip
//!
//! Supports `{config_dir}/snip/config.toml`, overridden by the
//! `SNIP_API_URL` / `SNIP_SHORTLINK_BASE_URL` environment variables and by
//! command-line flags.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, load_settings, load_settings_from, request_timeout, resolve_endpoints,
    resolve_endpoints_from_env, API_URL_ENV, SHORTLINK_BASE_URL_ENV,
};
pub use types::*;
