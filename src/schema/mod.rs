//! Data source schema descriptions
//!
//! A [`Schema`] is an ordered list of [`Attribute`]s. Each attribute carries the
//! Terraform-facing name (snake_case), the Kubernetes wire name it maps to, its
//! type, its required/optional/computed flags and any [`Validator`]s the
//! configuration validation engine should run against it.

mod consistency;

use serde::Serialize;

use crate::validation::Validator;

/// Value type of an attribute
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int32,
    Int64,
    Float64,
    Bool,
    List(Box<AttributeType>),
    Map(Box<AttributeType>),
    Object(Schema),
    /// Any JSON value, passed through untouched (int-or-string, preserved unknown fields)
    Dynamic,
}

impl AttributeType {
    /// Short type name used in diagnostics
    pub fn describe(&self) -> String {
        match self {
            AttributeType::String => "string".to_string(),
            AttributeType::Int32 => "number (int32)".to_string(),
            AttributeType::Int64 => "number (int64)".to_string(),
            AttributeType::Float64 => "number".to_string(),
            AttributeType::Bool => "bool".to_string(),
            AttributeType::List(elem) => format!("list of {}", elem.describe()),
            AttributeType::Map(elem) => format!("map of {}", elem.describe()),
            AttributeType::Object(_) => "object".to_string(),
            AttributeType::Dynamic => "dynamic".to_string(),
        }
    }
}

/// A single attribute of a schema
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub wire_name: String,
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl Attribute {
    /// Create an attribute with no flags set; the wire name defaults to `name`
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        let name = name.into();
        Self {
            wire_name: name.clone(),
            name,
            attr_type,
            description: None,
            required: false,
            optional: false,
            computed: false,
            deprecation_message: None,
            validators: Vec::new(),
        }
    }

    pub fn required_string(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::String).required()
    }

    pub fn optional_string(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::String).optional()
    }

    pub fn computed_string(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::String).computed()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn deprecated(mut self, message: impl Into<String>) -> Self {
        self.deprecation_message = Some(message.into());
        self
    }

    pub fn with_wire_name(mut self, wire_name: impl Into<String>) -> Self {
        self.wire_name = wire_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Computed attributes the user may not set
    pub fn is_read_only(&self) -> bool {
        self.computed && !self.optional && !self.required
    }

    /// Nested schema when this is an object attribute
    pub fn nested(&self) -> Option<&Schema> {
        match &self.attr_type {
            AttributeType::Object(schema) => Some(schema),
            _ => None,
        }
    }
}

/// Ordered set of attributes describing one object
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Schema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Look up an attribute by its Terraform name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Whether any attribute must be set by the user
    pub fn has_required(&self) -> bool {
        self.attributes.iter().any(|a| a.required)
    }

    /// Resolve a dotted attribute path such as `spec.backend.s3.bucket`
    pub fn lookup(&self, path: &str) -> Option<&Attribute> {
        let mut segments = path.split('.');
        let mut current = self.attribute(segments.next()?)?;
        for segment in segments {
            current = current.nested()?.attribute(segment)?;
        }
        Some(current)
    }
}
