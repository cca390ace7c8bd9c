//! Configuration module for genquery.
//!
//! Handles query defaults, the catalog worker, extensible metadata columns,
//! and environment variable expansion.

mod settings;

pub use settings::{expand_env_vars, QuerySettings, Settings, SettingsError, WorkerSettings};
