//! Manifest document construction and YAML serialization

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::crd::ManifestKind;
use crate::Result;

/// Object metadata accepted by every manifest data source
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ManifestMetadata {
    pub name: String,
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl ManifestMetadata {
    /// `namespace/name`, the data source id
    pub fn id(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }
}

/// Typed view of a manifest configuration in wire form
#[derive(Clone, Debug, Deserialize)]
pub struct ManifestConfig<S> {
    pub metadata: ManifestMetadata,
    pub spec: Option<S>,
}

/// Render a manifest as a YAML document
///
/// Keys are emitted as `apiVersion`, `kind`, `metadata`, `spec`; `spec` is
/// left out when it is absent or serializes to an empty mapping.
pub fn build_manifest<S: Serialize>(
    kind: &ManifestKind,
    metadata: &ManifestMetadata,
    spec: Option<&S>,
) -> Result<String> {
    let mut manifest = serde_yaml::Mapping::new();

    manifest.insert(
        serde_yaml::Value::String("apiVersion".to_string()),
        serde_yaml::Value::String(kind.api_version.clone()),
    );
    manifest.insert(
        serde_yaml::Value::String("kind".to_string()),
        serde_yaml::Value::String(kind.kind.clone()),
    );
    manifest.insert(
        serde_yaml::Value::String("metadata".to_string()),
        serde_yaml::to_value(metadata)?,
    );

    if let Some(spec) = spec {
        let spec = serde_yaml::to_value(spec)?;
        if !is_empty_mapping(&spec) {
            manifest.insert(serde_yaml::Value::String("spec".to_string()), spec);
        }
    }

    Ok(serde_yaml::to_string(&serde_yaml::Value::Mapping(manifest))?)
}

fn is_empty_mapping(value: &serde_yaml::Value) -> bool {
    match value {
        serde_yaml::Value::Mapping(mapping) => mapping.is_empty(),
        serde_yaml::Value::Null => true,
        _ => false,
    }
}
