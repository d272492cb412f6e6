//! Configuration file support for printwatch.
//!
//! Provides YAML-based configuration through `printwatch.config.yml` files,
//! including the file schema, loading, validation and the resolved settings
//! the rest of the application runs with.

use anyhow::Context;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::adapters::outbound::network::{
    DEFAULT_ATTEMPT_TIMEOUT, DEFAULT_CANDIDATE_TEMPLATES, DEFAULT_PING_DEADLINE,
    DEFAULT_PING_TIMEOUT, DEFAULT_QUERY_DEADLINE, HOST_PLACEHOLDER,
};
use crate::application::use_cases::DEFAULT_WORKER_CAP;
use crate::monitoring::policies::DEFAULT_REFRESH_INTERVAL;
use crate::shared::error::MonitorError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "printwatch.config.yml";
pub const DEFAULT_INVENTORY: &str = "printers.json";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub inventory: Option<PathBuf>,
    pub audit_log: Option<PathBuf>,
    pub worker_cap: Option<usize>,
    pub ping_timeout_secs: Option<u64>,
    pub ping_deadline_secs: Option<u64>,
    pub attempt_timeout_secs: Option<u64>,
    /// Absent keeps the default; an explicit `null` disables the deadline.
    #[serde(default, deserialize_with = "explicit_null")]
    pub query_deadline_secs: Option<Option<u64>>,
    pub refresh_interval_secs: Option<u64>,
    pub auto_refresh: Option<bool>,
    pub candidates: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

fn explicit_null<'de, D>(deserializer: D) -> std::result::Result<Option<Option<u64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u64>::deserialize(deserializer).map(Some)
}

/// Settings after merging defaults, the config file and command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    pub inventory: PathBuf,
    pub audit_log: Option<PathBuf>,
    pub worker_cap: usize,
    pub ping_timeout: Duration,
    pub ping_deadline: Duration,
    pub attempt_timeout: Duration,
    pub query_deadline: Option<Duration>,
    pub refresh_interval: Duration,
    pub auto_refresh: bool,
    pub candidates: Vec<String>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            inventory: PathBuf::from(DEFAULT_INVENTORY),
            audit_log: None,
            worker_cap: DEFAULT_WORKER_CAP,
            ping_timeout: DEFAULT_PING_TIMEOUT,
            ping_deadline: DEFAULT_PING_DEADLINE,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            query_deadline: Some(DEFAULT_QUERY_DEADLINE),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            auto_refresh: false,
            candidates: DEFAULT_CANDIDATE_TEMPLATES
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl MonitorConfig {
    /// Overlays the values present in `file` onto the defaults.
    pub fn from_file(file: &ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            inventory: file.inventory.clone().unwrap_or(defaults.inventory),
            audit_log: file.audit_log.clone(),
            worker_cap: file.worker_cap.unwrap_or(defaults.worker_cap),
            ping_timeout: file
                .ping_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.ping_timeout),
            ping_deadline: file
                .ping_deadline_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.ping_deadline),
            attempt_timeout: file
                .attempt_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.attempt_timeout),
            query_deadline: match file.query_deadline_secs {
                Some(value) => value.map(Duration::from_secs),
                None => defaults.query_deadline,
            },
            refresh_interval: file
                .refresh_interval_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.refresh_interval),
            auto_refresh: file.auto_refresh.unwrap_or(defaults.auto_refresh),
            candidates: file.candidates.clone().unwrap_or(defaults.candidates),
        }
    }

    /// Rejects settings the sweep cannot run with.
    pub fn validate(&self) -> Result<()> {
        let invalid = |field: &str, reason: &str, hint: &str| -> anyhow::Error {
            MonitorError::InvalidConfig {
                field: field.to_string(),
                reason: reason.to_string(),
                hint: hint.to_string(),
            }
            .into()
        };

        if self.worker_cap == 0 {
            return Err(invalid(
                "worker_cap",
                "must be at least 1",
                "Use the default of 50 unless the network needs gentler probing",
            ));
        }

        let positive = [
            ("ping_timeout_secs", self.ping_timeout),
            ("ping_deadline_secs", self.ping_deadline),
            ("attempt_timeout_secs", self.attempt_timeout),
            ("refresh_interval_secs", self.refresh_interval),
        ];
        for (field, value) in positive {
            if value.is_zero() {
                return Err(invalid(
                    field,
                    "must be greater than zero",
                    "Use a value in seconds, e.g. 5",
                ));
            }
        }
        if self.query_deadline == Some(Duration::ZERO) {
            return Err(invalid(
                "query_deadline_secs",
                "must be greater than zero",
                "Set it to null to query without an overall deadline",
            ));
        }

        if self.candidates.is_empty() {
            return Err(invalid(
                "candidates",
                "at least one endpoint template is required",
                "Remove the key to use the built-in candidate list",
            ));
        }
        if let Some(template) = self
            .candidates
            .iter()
            .find(|t| !t.contains(HOST_PLACEHOLDER))
        {
            return Err(invalid(
                "candidates",
                &format!("template '{}' does not contain {}", template, HOST_PLACEHOLDER),
                "Write templates such as \"ipp://{host}/ipp/print\"",
            ));
        }

        Ok(())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    MonitorConfig::from_file(&config).validate()?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored", key);
    }
}
