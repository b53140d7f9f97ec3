//! Configuration validation
//!
//! Validators are declared on schema attributes; [`validate_config`] walks a
//! configuration against its schema and runs them.

mod config;
pub mod kubernetes;

pub use config::validate_config;

use serde::Serialize;
use serde_json::Value;

use crate::schema::AttributeType;

/// Syntax check attached to a schema attribute
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    /// Kubernetes object name (DNS-1123 subdomain)
    ObjectName,
    /// Kubernetes namespace name (DNS-1123 label)
    Namespace,
    /// Label map: qualified-name keys, label-value values
    Labels,
    /// Annotation map: qualified-name keys, bounded total size
    Annotations,
}

impl Validator {
    /// Whether the validator can check values of the given type
    pub fn applies_to(&self, attr_type: &AttributeType) -> bool {
        match self {
            Validator::ObjectName | Validator::Namespace => *attr_type == AttributeType::String,
            Validator::Labels | Validator::Annotations => {
                *attr_type == AttributeType::Map(Box::new(AttributeType::String))
            }
        }
    }

    /// Check a value, returning one message per problem found
    ///
    /// Values of the wrong shape are left to the type check and pass here.
    pub fn check(&self, value: &Value) -> Vec<String> {
        match self {
            Validator::ObjectName => value
                .as_str()
                .and_then(|s| kubernetes::validate_dns1123_subdomain(s).err())
                .into_iter()
                .collect(),
            Validator::Namespace => value
                .as_str()
                .and_then(|s| kubernetes::validate_dns1123_label(s).err())
                .into_iter()
                .collect(),
            Validator::Labels => {
                let Some(map) = value.as_object() else {
                    return Vec::new();
                };
                let mut errors = Vec::new();
                for (key, value) in map {
                    if let Err(e) = kubernetes::validate_qualified_name(key) {
                        errors.push(format!("key '{}': {}", key, e));
                    }
                    if let Some(Err(e)) = value.as_str().map(kubernetes::validate_label_value) {
                        errors.push(format!("value of '{}': {}", key, e));
                    }
                }
                errors
            }
            Validator::Annotations => {
                let Some(map) = value.as_object() else {
                    return Vec::new();
                };
                kubernetes::validate_annotations(
                    map.iter()
                        .map(|(k, v)| (k.as_str(), v.as_str().unwrap_or_default())),
                )
            }
        }
    }

    /// Human-readable summary used in diagnostics
    pub fn summary(&self) -> &'static str {
        match self {
            Validator::ObjectName => "Invalid object name",
            Validator::Namespace => "Invalid namespace",
            Validator::Labels => "Invalid labels",
            Validator::Annotations => "Invalid annotations",
        }
    }
}
