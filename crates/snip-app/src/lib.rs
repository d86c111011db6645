//! snip-app - Application state and orchestration for snip
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the events, and
//! [`handler::update`] the only place state changes. Side effects are
//! returned as [`UpdateAction`]s and run by [`actions`] as tokio tasks.
//! Configuration loading lives in [`config`].

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod engine;
pub mod form;
pub mod handler;
pub mod history;
pub mod input_key;
pub mod message;
pub mod result_view;
pub mod shorten;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use state::{AppState, View};
