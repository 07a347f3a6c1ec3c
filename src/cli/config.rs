//! CLI configuration file
//!
//! ```text
//! {"default_type": "STRING", "log_severity": "warn", "pretty": false}
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::{log_event_with_fields, Event, Severity};
use crate::schema::{is_canonical_type, DEFAULT_TYPE};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Type for dtypes with no mapping in `generate` (default STRING)
    #[serde(default = "default_type")]
    pub default_type: String,

    /// Lowest severity written to stderr (default "warn")
    #[serde(default = "default_log_severity")]
    pub log_severity: String,

    /// Pretty-print responses (default false)
    #[serde(default)]
    pub pretty: bool,
}

fn default_type() -> String {
    DEFAULT_TYPE.to_string()
}

fn default_log_severity() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_type: default_type(),
            log_severity: default_log_severity(),
            pretty: false,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        let path_str = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", path_str.as_str())]);

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> CliResult<()> {
        if !is_canonical_type(&self.default_type) {
            return Err(CliError::config_error(format!(
                "Invalid default_type: '{}'. Must be an upper-case BigQuery type name.",
                self.default_type
            )));
        }

        self.log_severity
            .parse::<Severity>()
            .map_err(|e| CliError::config_error(format!("Invalid log_severity: {}", e)))?;

        Ok(())
    }

    /// Parsed log severity; WARN if the value does not parse
    pub fn severity(&self) -> Severity {
        self.log_severity.parse().unwrap_or(Severity::Warn)
    }
}
