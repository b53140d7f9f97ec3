//! Provider configuration

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::{Error, Result};

/// Environment variable overriding the data source type-name prefix
pub const TYPE_PREFIX_ENV: &str = "K8UP_PROVIDER_TYPE_PREFIX";

/// Default data source type-name prefix
pub const DEFAULT_TYPE_PREFIX: &str = "k8s";

lazy_static! {
    static ref TYPE_PREFIX: Regex = Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid regex");
}

/// Provider-wide settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Prefix of every data source type name, e.g. `k8s` in `k8s_k8up_io_check_v1_manifest`
    pub type_name_prefix: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            type_name_prefix: DEFAULT_TYPE_PREFIX.to_string(),
        }
    }
}

impl ProviderConfig {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let config = match std::env::var(TYPE_PREFIX_ENV) {
            Ok(prefix) if !prefix.is_empty() => Self {
                type_name_prefix: prefix,
            },
            _ => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings produce valid type names
    pub fn validate(&self) -> Result<()> {
        if !TYPE_PREFIX.is_match(&self.type_name_prefix) {
            return Err(Error::Config(format!(
                "type name prefix '{}' must match {}",
                self.type_name_prefix,
                TYPE_PREFIX.as_str()
            )));
        }
        Ok(())
    }
}

/// Read a data source configuration file
///
/// `.json` files are parsed as JSON, anything else as YAML.
pub fn load_data_source_config(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
    debug!(path = %path.display(), bytes = raw.len(), "Loaded configuration");

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let value = if is_json {
        serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("invalid JSON in {}: {}", path.display(), e)))?
    } else {
        serde_yaml::from_str(&raw)
            .map_err(|e| Error::Config(format!("invalid YAML in {}: {}", path.display(), e)))?
    };
    Ok(value)
}
