//! Generic manifest data source shared by every k8up kind

use std::marker::PhantomData;

use serde_json::Value;
use tracing::{debug, info, instrument};

use super::DataSource;
use crate::adapters::config_mapping::to_wire;
use crate::adapters::manifest_yaml::{build_manifest, ManifestConfig};
use crate::adapters::schema_builder::build_manifest_schema;
use crate::crd::{K8upResource, ManifestKind};
use crate::schema::Schema;
use crate::{Error, Result};

/// Read-only data source rendering one k8up kind as a YAML manifest
pub struct ManifestDataSource<K: K8upResource> {
    kind: ManifestKind,
    schema: Schema,
    _resource: PhantomData<fn() -> K>,
}

impl<K: K8upResource> ManifestDataSource<K> {
    /// Build the data source, deriving its schema from the CRD of `K`
    pub fn new(prefix: &str) -> Result<Self> {
        let kind = ManifestKind::of::<K>(prefix);
        let schema = build_manifest_schema(&kind, &K::crd())?;
        Ok(Self {
            kind,
            schema,
            _resource: PhantomData,
        })
    }
}

impl<K: K8upResource> DataSource for ManifestDataSource<K> {
    fn type_name(&self) -> &str {
        &self.kind.type_name
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    #[instrument(skip(self, config), fields(type_name = %self.kind.type_name))]
    fn read(&self, config: &Value) -> Result<Value> {
        let mut state = match config {
            Value::Object(map) => map.clone(),
            _ => {
                return Err(Error::Config(
                    "data source configuration must be an object".to_string(),
                ))
            }
        };

        let wire = to_wire(&self.schema, &state);
        debug!(keys = wire.len(), "Mapped configuration to wire form");

        let parsed: ManifestConfig<K::Spec> =
            serde_json::from_value(Value::Object(wire)).map_err(|source| Error::Decode {
                kind: self.kind.kind.clone(),
                source,
            })?;

        let yaml = build_manifest(&self.kind, &parsed.metadata, parsed.spec.as_ref())?;
        let id = parsed.metadata.id();

        info!(id = %id, kind = %self.kind.kind, "Rendered manifest");

        state.insert("id".to_string(), Value::String(id));
        state.insert("yaml".to_string(), Value::String(yaml));
        Ok(Value::Object(state))
    }
}
