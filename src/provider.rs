//! Provider facade over the registered manifest data sources

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::ProviderConfig;
use crate::datasources::{self, DataSource};
use crate::diagnostics::{has_errors, Diagnostic};
use crate::schema::Schema;
use crate::validation::validate_config;
use crate::{Error, Result};

/// Outcome of a data source read
#[derive(Clone, Debug, Default, Serialize)]
pub struct ReadResponse {
    /// New state; absent when the read failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl ReadResponse {
    fn failed(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            state: None,
            diagnostics,
        }
    }

    pub fn has_errors(&self) -> bool {
        has_errors(&self.diagnostics)
    }
}

/// Registry of manifest data sources
pub struct Provider {
    config: ProviderConfig,
    data_sources: BTreeMap<String, Box<dyn DataSource>>,
}

impl Provider {
    /// Register every data source and check its schema
    pub fn new(config: ProviderConfig) -> Result<Self> {
        config.validate()?;

        let mut data_sources = BTreeMap::new();
        for data_source in datasources::all(&config.type_name_prefix)? {
            data_source.schema().validate_implementation().map_err(|e| {
                Error::Schema(format!("{}: {}", data_source.type_name(), e))
            })?;
            data_sources.insert(data_source.type_name().to_string(), data_source);
        }

        info!(
            data_sources = data_sources.len(),
            prefix = %config.type_name_prefix,
            "Registered manifest data sources"
        );

        Ok(Self {
            config,
            data_sources,
        })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Registered type names, sorted
    pub fn data_source_names(&self) -> impl Iterator<Item = &str> {
        self.data_sources.keys().map(String::as_str)
    }

    fn data_source(&self, type_name: &str) -> Result<&dyn DataSource> {
        self.data_sources
            .get(type_name)
            .map(Box::as_ref)
            .ok_or_else(|| Error::UnknownDataSource(type_name.to_string()))
    }

    /// Schema of one data source
    pub fn schema(&self, type_name: &str) -> Result<&Schema> {
        Ok(self.data_source(type_name)?.schema())
    }

    /// Schemas of every data source, keyed by type name
    pub fn schemas(&self) -> BTreeMap<&str, &Schema> {
        self.data_sources
            .iter()
            .map(|(name, ds)| (name.as_str(), ds.schema()))
            .collect()
    }

    /// Validate a configuration without reading
    pub fn validate_data_source_config(&self, type_name: &str, config: &Value) -> Vec<Diagnostic> {
        match self.data_source(type_name) {
            Ok(data_source) => validate_config(data_source.schema(), config),
            Err(e) => vec![Diagnostic::from(&e)],
        }
    }

    /// Validate and read a data source
    ///
    /// Validation errors and read failures come back as diagnostics with no state.
    pub fn read_data_source(&self, type_name: &str, config: &Value) -> ReadResponse {
        let data_source = match self.data_source(type_name) {
            Ok(ds) => ds,
            Err(e) => return ReadResponse::failed(vec![Diagnostic::from(&e)]),
        };

        let diagnostics = validate_config(data_source.schema(), config);
        if has_errors(&diagnostics) {
            warn!(
                type_name,
                errors = diagnostics.len(),
                "Rejected data source configuration"
            );
            return ReadResponse::failed(diagnostics);
        }

        match data_source.read(config) {
            Ok(state) => ReadResponse {
                state: Some(state),
                diagnostics,
            },
            Err(e) => {
                warn!(type_name, error = %e, "Data source read failed");
                let mut diagnostics = diagnostics;
                diagnostics.push(Diagnostic::from(&e));
                ReadResponse::failed(diagnostics)
            }
        }
    }
}
