//! Terraform configuration to Kubernetes wire JSON transformation
//!
//! Configuration arrives keyed by snake_case attribute names with `null` for
//! everything the user left unset. The Kubernetes side wants camelCase wire
//! names and omits unset fields, so this walks the schema and rebuilds the
//! object: renaming keys, dropping nulls, and dropping empty lists and maps.
//! Empty nested objects are kept (`emptyDir: {}` means something).

use serde_json::{Map, Value};

use crate::schema::{AttributeType, Schema};

/// Map a configuration object onto its wire representation
///
/// Read-only attributes and keys the schema does not know are skipped.
pub fn to_wire(schema: &Schema, config: &Map<String, Value>) -> Map<String, Value> {
    let mut wire = Map::new();

    for attribute in &schema.attributes {
        if attribute.is_read_only() {
            continue;
        }
        let Some(value) = config.get(&attribute.name) else {
            continue;
        };
        if let Some(mapped) = map_value(&attribute.attr_type, value) {
            wire.insert(attribute.wire_name.clone(), mapped);
        }
    }

    wire
}

/// Map a single value, returning `None` when it should be omitted
fn map_value(attr_type: &AttributeType, value: &Value) -> Option<Value> {
    match (attr_type, value) {
        (_, Value::Null) => None,
        (AttributeType::Object(schema), Value::Object(map)) => {
            Some(Value::Object(to_wire(schema, map)))
        }
        (AttributeType::List(elem), Value::Array(items)) => {
            let items: Vec<Value> = items
                .iter()
                .filter_map(|item| map_element(elem, item))
                .collect();
            (!items.is_empty()).then_some(Value::Array(items))
        }
        (AttributeType::Map(elem), Value::Object(entries)) => {
            let entries: Map<String, Value> = entries
                .iter()
                .filter_map(|(key, item)| map_element(elem, item).map(|v| (key.clone(), v)))
                .collect();
            (!entries.is_empty()).then_some(Value::Object(entries))
        }
        _ => Some(value.clone()),
    }
}

/// Collection elements keep their position even when empty
fn map_element(attr_type: &AttributeType, value: &Value) -> Option<Value> {
    match (attr_type, value) {
        (_, Value::Null) => None,
        (AttributeType::Object(schema), Value::Object(map)) => {
            Some(Value::Object(to_wire(schema, map)))
        }
        _ => map_value(attr_type, value).or_else(|| Some(value.clone())),
    }
}
