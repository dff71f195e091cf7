//! Configuration model for inlay.
//!
//! This module defines the Config struct that a host agent loads from a YAML
//! file to declare its workspace roots. It supports forward-compatible YAML
//! parsing (unknown fields are ignored), sensible defaults for optional
//! fields, and validation of config values.

use crate::error::{InjectError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for prompt injection.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Workspace root directories, in resolution-priority order.
    /// The first entry is the primary root. Each entry must be absolute.
    pub workspace_roots: Vec<String>,

    /// Optional path to an NDJSON file recording failed injections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_log: Option<String>,
}

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            InjectError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| InjectError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `workspace_roots` entries must be non-empty absolute paths
    pub fn validate(&self) -> Result<()> {
        for root in &self.workspace_roots {
            if root.is_empty() {
                return Err(InjectError::Config(
                    "workspace_roots entries must not be empty".to_string(),
                ));
            }
            if !Path::new(root).is_absolute() {
                return Err(InjectError::Config(format!(
                    "workspace root '{}' must be an absolute path",
                    root
                )));
            }
        }

        Ok(())
    }
}
