//! Engine configuration from the environment.
//!
//! Values come from process environment variables, optionally seeded from
//! `.env.local` / `.env` at the repository root. Invalid values are logged
//! and ignored, keeping the default.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "tomebound_engine=info";

/// Configuration errors surfaced to the preview binary.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid TOMEBOUND_LOG filter '{filter}': {message}")]
    InvalidLogFilter { filter: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// `tracing` filter directive
    pub log_filter: String,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Embed raw records in unrecognised-category views
    pub raw_debug: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            pretty: true,
            raw_debug: true,
        }
    }
}

impl EngineConfig {
    /// Reads `TOMEBOUND_LOG`, `TOMEBOUND_PRETTY` and `TOMEBOUND_RAW_DEBUG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup("TOMEBOUND_LOG").map(|v| v.trim().to_string()) {
            if !filter.is_empty() {
                config.log_filter = filter;
            }
        }
        if let Some(val) = lookup("TOMEBOUND_PRETTY") {
            apply_bool("TOMEBOUND_PRETTY", &val, &mut config.pretty);
        }
        if let Some(val) = lookup("TOMEBOUND_RAW_DEBUG") {
            apply_bool("TOMEBOUND_RAW_DEBUG", &val, &mut config.raw_debug);
        }

        config
    }

    /// Builds the tracing filter, rejecting unparseable directives.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| ConfigError::InvalidLogFilter {
            filter: self.log_filter.clone(),
            message: e.to_string(),
        })
    }
}

/// The tracing filter alone, read before a subscriber exists so that
/// warnings from [`EngineConfig::from_env`] are not lost.
pub fn log_filter_from_env() -> Result<EnvFilter, ConfigError> {
    EngineConfig::from_lookup(|key| match key {
        "TOMEBOUND_LOG" => std::env::var(key).ok(),
        _ => None,
    })
    .env_filter()
}

fn apply_bool(key: &str, val: &str, target: &mut bool) {
    match parse_bool(val) {
        Some(flag) => *target = flag,
        None => tracing::warn!(key, val = %val, "Not a valid boolean, ignoring"),
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Loads `.env.local` then `.env` from the workspace root, if present.
///
/// Variables already set in the process environment are not overridden.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
