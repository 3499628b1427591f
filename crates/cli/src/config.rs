//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `CARVET_DATA` - Path of the order book JSON file (default: `orders.json`)
//! - `CARVET_NOTES` - Path of the support notepad JSON file (default: `notes.json`)
//! - `CARVET_SEVERITY_POLICY` - Quality severity policy, `three-tier` or
//!   `binary` (default: `three-tier`)

use std::path::PathBuf;

use thiserror::Error;

use carvet_crm::{DEFAULT_SEVERITY_POLICY, SeverityPolicy};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Order book JSON file.
    pub data_path: PathBuf,
    /// Support notepad JSON file.
    pub notes_path: PathBuf,
    /// Severity policy for the quality evaluator.
    pub severity_policy: SeverityPolicy,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CARVET_SEVERITY_POLICY` is set to an
    /// unknown policy name.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_path = PathBuf::from(get_env_or_default("CARVET_DATA", "orders.json"));
        let notes_path = PathBuf::from(get_env_or_default("CARVET_NOTES", "notes.json"));
        let severity_policy = match std::env::var("CARVET_SEVERITY_POLICY") {
            Ok(value) => value.parse::<SeverityPolicy>().map_err(|e| {
                ConfigError::InvalidEnvVar("CARVET_SEVERITY_POLICY".to_string(), e)
            })?,
            Err(_) => DEFAULT_SEVERITY_POLICY,
        };

        Ok(Self {
            data_path,
            notes_path,
            severity_policy,
        })
    }

    /// Replace the order-book path when a command-line flag supplied one.
    /// Flags take precedence over the environment.
    #[must_use]
    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.data_path = path;
        }
        self
    }

    /// Replace the notepad path when a command-line flag supplied one.
    #[must_use]
    pub fn with_notes_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.notes_path = path;
        }
        self
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
