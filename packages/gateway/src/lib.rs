//! # Gateway: server-side access to the completion and storage services
//!
//! Everything that performs network I/O on behalf of the server functions lives
//! here. The crate is only linked into server builds.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Layered settings (`config.toml`, environment, `.env`) and the validated [`AppConfig`] |
//! | [`error`] | [`ConfigError`], [`RequestFailed`], [`BackendError`] |
//! | [`completion`] | One chat-completion round trip per call, sanitized |
//! | [`backend`] | PostgREST insert and filtered select over [`civic::Record`] tables |
//! | [`services`] | The guidance pipeline: complete, then record, then audit |
//! | [`state`] | [`AppState`], built once at startup and shared with every request |
//!
//! ## Flow
//!
//! 1. `web` calls [`AppConfig::load`] once and wraps the result in an [`AppState`].
//!    A missing key does not stop the server; the state just carries no services
//!    and a [`civic::ConfigStatus`] listing what is missing.
//! 2. Each server function asks the state for its [`Services`] and runs
//!    [`Services::respond_and_record`] (or one of the submission helpers).
//! 3. Completion failures come back as [`RequestFailed`]. Storage failures never
//!    fail a reply; they are reported through [`PersistOutcome`].

pub mod backend;
pub mod completion;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

#[cfg(test)]
mod testing;

pub use backend::{BackendClient, Select};
pub use completion::CompletionClient;
pub use config::{AppConfig, CompletionSettings, Settings};
pub use error::{BackendError, ConfigError, FailureCause, RequestFailed};
pub use services::{PersistOutcome, Services};
pub use state::AppState;
