// Rust guideline compliant 2026-02-06

//! Configuration management for Pascalia.

use crate::engine::TraditionPolicy;
use crate::models::Tradition;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "pascalia.toml";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Returns the lowercase name (`json`, `table`, `plain`).
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
            OutputFormat::Plain => "plain",
        }
    }
}

/// Configuration for Pascalia behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tradition used when a command does not name one.
    #[serde(default)]
    pub default_tradition: Tradition,

    /// What to do for traditions without a rule set.
    #[serde(default)]
    pub tradition_policy: TraditionPolicy,

    /// Whether Cheesefare week is marked as a dairy fast.
    #[serde(default)]
    pub observe_cheesefare_week: bool,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log level for diagnostics written to stderr.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Default log level.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tradition: Tradition::default(),
            tradition_policy: TraditionPolicy::default(),
            observe_cheesefare_week: false,
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `path`, when it exists
    /// 3. Environment variables with `PASCALIA_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `PASCALIA_DEFAULT_TRADITION` - Tradition code (RO/RU/GR/SRB/USA)
    /// - `PASCALIA_TRADITION_POLICY` - fallback or strict
    /// - `PASCALIA_OBSERVE_CHEESEFARE_WEEK` - true/false
    /// - `PASCALIA_OUTPUT_FORMAT` - json/table/plain
    /// - `PASCALIA_LOG_LEVEL` - error/warn/info/debug/trace
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PASCALIA_DEFAULT_TRADITION") {
            self.default_tradition = val.parse()?;
        }

        if let Ok(val) = std::env::var("PASCALIA_TRADITION_POLICY") {
            self.tradition_policy = val.parse()?;
        }

        if let Ok(val) = std::env::var("PASCALIA_OBSERVE_CHEESEFARE_WEEK") {
            self.observe_cheesefare_week = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "PASCALIA_OBSERVE_CHEESEFARE_WEEK must be true or false".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("PASCALIA_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "PASCALIA_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("PASCALIA_LOG_LEVEL") {
            self.log_level = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `log_level` is not a known level.
    fn validate(&self) -> Result<()> {
        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(crate::Error::InvalidConfig(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
