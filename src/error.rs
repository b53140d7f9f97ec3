//! Error types for the k8up manifest provider

use thiserror::Error;

/// Result type for the provider
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the provider
#[derive(Debug, Error)]
pub enum Error {
    /// The manifest could not be serialized to YAML
    #[error("Failed to marshal manifest to YAML: {0}")]
    Marshal(#[from] serde_yaml::Error),

    /// The configuration could not be mapped onto the typed resource
    #[error("Failed to decode {kind} configuration: {source}")]
    Decode {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// A data source schema is internally inconsistent
    #[error("Schema error: {0}")]
    Schema(String),

    /// No data source is registered under the requested type name
    #[error("Unknown data source type: {0}")]
    UnknownDataSource(String),

    /// Provider configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
