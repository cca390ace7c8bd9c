//! TOML-based configuration for genquery.
//!
//! Supports a config file (genquery.toml) with environment variable expansion.
//!
//! Example configuration:
//! ```toml
//! [query]
//! results_per_page = 500
//! distinct = true
//! case_insensitive = false
//! compute_total_row_count = false
//! zone = "tempZone"
//! close_behavior = "auto"
//!
//! [worker]
//! path = "${GENQUERY_HOME}/bin/catalog-worker"
//! args = ["--host", "catalog.example.org"]
//! timeout_secs = 30
//!
//! [extensible_metadata]
//! STUDY_ID = 10001
//! SAMPLE_NAME = 10002
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::ExtensibleMetadataMap;
use crate::executor::{CloseBehavior, PageRequest};
use crate::query::{QueryBuilder, TextQuery};

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Defaults applied to every query.
    pub query: QuerySettings,

    /// Catalog worker process.
    pub worker: WorkerSettings,

    /// Site-defined column names and their wire codes.
    pub extensible_metadata: BTreeMap<String, u32>,
}

/// Query defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QuerySettings {
    /// Rows requested per page.
    pub results_per_page: u32,

    /// Collapse duplicate rows.
    pub distinct: bool,

    /// Compare where-clause values case-insensitively.
    pub case_insensitive: bool,

    /// Ask the catalog for the total matching row count.
    pub compute_total_row_count: bool,

    /// Zone to query, if not the local one.
    pub zone: Option<String>,

    /// "manual" or "auto".
    pub close_behavior: CloseBehavior,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            results_per_page: 500,
            distinct: true,
            case_insensitive: false,
            compute_total_row_count: false,
            zone: None,
            close_behavior: CloseBehavior::Manual,
        }
    }
}

/// Worker configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkerSettings {
    /// Path to the catalog worker binary (supports ${ENV_VAR} expansion).
    pub path: Option<String>,

    /// Extra command-line arguments for the worker.
    pub args: Vec<String>,

    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self {
            path: None,
            args: Vec::new(),
            timeout_secs: 30,
        }
    }
}

impl WorkerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `GENQUERY_CONFIG`
    /// 2. `./genquery.toml`
    /// 3. `~/.config/genquery/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("GENQUERY_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("genquery.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("genquery").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.query.results_per_page == 0 {
            return Err(SettingsError::InvalidConfig(
                "query.results_per_page must be greater than zero".to_string(),
            ));
        }
        if self.worker.timeout_secs == 0 {
            return Err(SettingsError::InvalidConfig(
                "worker.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if let Some((name, _)) = self.extensible_metadata.iter().find(|(_, code)| **code == 0) {
            return Err(SettingsError::InvalidConfig(format!(
                "extensible_metadata.{name} must have a non-zero code"
            )));
        }
        Ok(())
    }

    /// The worker binary path with environment variables expanded.
    pub fn worker_path(&self) -> Result<Option<PathBuf>, SettingsError> {
        self.worker
            .path
            .as_deref()
            .map(|path| expand_env_vars(path).map(PathBuf::from))
            .transpose()
    }

    pub fn extensible_metadata_map(&self) -> ExtensibleMetadataMap {
        self.extensible_metadata
            .iter()
            .map(|(name, code)| (name.clone(), *code))
            .collect()
    }

    /// A text query carrying the configured defaults.
    pub fn text_query(&self, query: impl Into<String>) -> TextQuery {
        TextQuery::new(query, self.query.results_per_page)
            .case_insensitive(self.query.case_insensitive)
            .compute_total_row_count(self.query.compute_total_row_count)
    }

    /// A builder carrying the configured defaults.
    pub fn query_builder(&self) -> QueryBuilder {
        QueryBuilder::new(self.query.distinct)
            .case_insensitive(self.query.case_insensitive)
            .compute_total_row_count(self.query.compute_total_row_count)
    }

    /// First-page request with the configured zone and close behavior.
    pub fn page_request(&self) -> PageRequest {
        let request = PageRequest::new().close_behavior(self.query.close_behavior);
        match &self.query.zone {
            Some(zone) => request.zone(zone.clone()),
            None => request,
        }
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let var_name: String = if chars.next_if_eq(&'{').is_some() {
            chars.by_ref().take_while(|&ch| ch != '}').collect()
        } else {
            // $VAR ends at the first non-alphanumeric/underscore
            let mut name = String::new();
            while let Some(ch) = chars.next_if(|&ch| ch.is_alphanumeric() || ch == '_') {
                name.push(ch);
            }
            if name.is_empty() {
                // Just a lone $, keep it
                result.push('$');
                continue;
            }
            name
        };

        let value =
            env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}
