//! Schema implementation checks
//!
//! Mirrors the checks the plugin framework runs when a provider hands over its
//! schemas: broken schemas are implementation bugs, so they are caught at
//! provider construction and in tests rather than during a read.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use super::{Attribute, AttributeType, Schema};
use crate::{Error, Result};

lazy_static! {
    static ref ATTRIBUTE_NAME: Regex = Regex::new(r"^[a-z_][a-z0-9_]*$").expect("valid regex");
}

impl Schema {
    /// Check the schema for self-inconsistencies
    ///
    /// Fails on flag combinations the framework rejects, invalid or duplicate
    /// attribute names, and validators attached to attributes they cannot check.
    pub fn validate_implementation(&self) -> Result<()> {
        validate_object(self, "")
    }
}

fn validate_object(schema: &Schema, parent: &str) -> Result<()> {
    let mut names = HashSet::new();
    let mut wire_names = HashSet::new();

    for attribute in &schema.attributes {
        let path = join(parent, &attribute.name);

        if !names.insert(attribute.name.as_str()) {
            return Err(Error::Schema(format!("{}: duplicate attribute name", path)));
        }
        if !wire_names.insert(attribute.wire_name.as_str()) {
            return Err(Error::Schema(format!(
                "{}: duplicate wire name '{}'",
                path, attribute.wire_name
            )));
        }
        if !ATTRIBUTE_NAME.is_match(&attribute.name) {
            return Err(Error::Schema(format!(
                "{}: attribute names must match {}",
                path,
                ATTRIBUTE_NAME.as_str()
            )));
        }

        validate_flags(attribute, &path)?;

        for validator in &attribute.validators {
            if !validator.applies_to(&attribute.attr_type) {
                return Err(Error::Schema(format!(
                    "{}: validator {:?} cannot check a {}",
                    path,
                    validator,
                    attribute.attr_type.describe()
                )));
            }
        }

        validate_type(&attribute.attr_type, &path)?;
    }

    Ok(())
}

fn validate_flags(attribute: &Attribute, path: &str) -> Result<()> {
    match (attribute.required, attribute.optional, attribute.computed) {
        (true, false, false) | (false, true, _) | (false, false, true) => Ok(()),
        (true, _, true) => Err(Error::Schema(format!(
            "{}: attribute cannot be both required and computed",
            path
        ))),
        (true, true, false) => Err(Error::Schema(format!(
            "{}: attribute cannot be both required and optional",
            path
        ))),
        (false, false, false) => Err(Error::Schema(format!(
            "{}: attribute must be required, optional, or computed",
            path
        ))),
    }
}

fn validate_type(attr_type: &AttributeType, path: &str) -> Result<()> {
    match attr_type {
        AttributeType::List(elem) | AttributeType::Map(elem) => validate_type(elem, path),
        AttributeType::Object(schema) => validate_object(schema, path),
        _ => Ok(()),
    }
}

fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}
