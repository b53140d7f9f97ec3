//! Schema-driven configuration validation

use serde_json::{Map, Value};

use crate::diagnostics::{has_errors, Diagnostic};
use crate::schema::{Attribute, AttributeType, Schema};

/// Validate a configuration object against a schema
///
/// Reports unknown attributes, missing required attributes, values set on
/// read-only attributes, type mismatches and validator failures as errors.
/// Setting a deprecated attribute is a warning. `null` is treated as unset,
/// the way Terraform sends unset attributes.
pub fn validate_config(schema: &Schema, config: &Value) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    match config {
        Value::Object(map) => validate_object(schema, map, "", &mut diagnostics),
        _ => diagnostics.push(Diagnostic::error(
            "Invalid configuration",
            "configuration must be an object",
        )),
    }
    diagnostics
}

fn validate_object(
    schema: &Schema,
    config: &Map<String, Value>,
    parent: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for key in config.keys() {
        if schema.attribute(key).is_none() {
            diagnostics.push(
                Diagnostic::error(
                    "Unsupported argument",
                    format!("An argument named \"{}\" is not expected here.", key),
                )
                .with_attribute(join(parent, key)),
            );
        }
    }

    for attribute in &schema.attributes {
        let path = join(parent, &attribute.name);
        let value = config.get(&attribute.name).unwrap_or(&Value::Null);
        validate_attribute(attribute, value, &path, diagnostics);
    }
}

fn validate_attribute(
    attribute: &Attribute,
    value: &Value,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if value.is_null() {
        if attribute.required {
            diagnostics.push(
                Diagnostic::error(
                    "Missing Configuration for Required Attribute",
                    format!(
                        "Must set a configuration value for the {} attribute.",
                        path
                    ),
                )
                .with_attribute(path),
            );
        }
        return;
    }

    if attribute.is_read_only() {
        diagnostics.push(
            Diagnostic::error(
                "Invalid Configuration for Read-Only Attribute",
                format!(
                    "Cannot set value for the {} attribute as the provider has marked it as \
                     read-only.",
                    path
                ),
            )
            .with_attribute(path),
        );
        return;
    }

    if let Some(message) = &attribute.deprecation_message {
        diagnostics.push(
            Diagnostic::warning("Attribute Deprecated", message.clone()).with_attribute(path),
        );
    }

    let before = diagnostics.len();
    validate_value(&attribute.attr_type, value, path, diagnostics);
    if has_errors(&diagnostics[before..]) {
        return;
    }

    for validator in &attribute.validators {
        for message in validator.check(value) {
            diagnostics.push(
                Diagnostic::error(validator.summary(), format!("{}: {}", path, message))
                    .with_attribute(path),
            );
        }
    }
}

fn validate_value(
    attr_type: &AttributeType,
    value: &Value,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let matches = match attr_type {
        AttributeType::String => value.is_string(),
        AttributeType::Int32 => value.as_i64().is_some_and(|n| i32::try_from(n).is_ok()),
        AttributeType::Int64 => value.as_i64().is_some(),
        AttributeType::Float64 => value.is_number(),
        AttributeType::Bool => value.is_boolean(),
        AttributeType::Dynamic => true,
        AttributeType::List(elem) => match value {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    let item_path = format!("{}[{}]", path, index);
                    if item.is_null() {
                        diagnostics.push(null_element(&item_path));
                    } else {
                        validate_value(elem, item, &item_path, diagnostics);
                    }
                }
                true
            }
            _ => false,
        },
        AttributeType::Map(elem) => match value {
            Value::Object(entries) => {
                for (key, item) in entries {
                    let item_path = format!("{}[\"{}\"]", path, key);
                    if item.is_null() {
                        diagnostics.push(null_element(&item_path));
                    } else {
                        validate_value(elem, item, &item_path, diagnostics);
                    }
                }
                true
            }
            _ => false,
        },
        AttributeType::Object(schema) => match value {
            Value::Object(map) => {
                validate_object(schema, map, path, diagnostics);
                true
            }
            _ => false,
        },
    };

    if !matches {
        diagnostics.push(
            Diagnostic::error(
                "Incorrect attribute value type",
                format!("{}: {} required.", path, attr_type.describe()),
            )
            .with_attribute(path),
        );
    }
}

fn null_element(path: &str) -> Diagnostic {
    Diagnostic::error(
        "Invalid collection element",
        format!("{}: null values are not allowed in collections.", path),
    )
    .with_attribute(path)
}

fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}
