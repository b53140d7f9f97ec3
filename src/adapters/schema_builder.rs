//! CRD OpenAPI schema to data source schema transformation

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, JSONSchemaProps, JSONSchemaPropsOrArray, JSONSchemaPropsOrBool,
};
use tracing::debug;

use crate::crd::{to_snake_case, ManifestKind};
use crate::schema::{Attribute, AttributeType, Schema};
use crate::validation::Validator;
use crate::{Error, Result};

/// Build the full data source schema for one k8up kind
///
/// The `metadata`, `id` and `yaml` attributes are the same for every kind;
/// `spec` is derived from the CRD's OpenAPI v3 schema.
pub fn build_manifest_schema(
    kind: &ManifestKind,
    crd: &CustomResourceDefinition,
) -> Result<Schema> {
    let mut schema = Schema::new()
        .with_description(format!(
            "{} is the Schema for the {} API. This data source renders a {}/{} manifest as YAML.",
            kind.kind,
            crd.spec.names.plural,
            kind.api_version,
            kind.kind
        ))
        .with_attribute(
            Attribute::computed_string("id")
                .with_description("Contains the value 'metadata.namespace/metadata.name'."),
        )
        .with_attribute(
            Attribute::computed_string("yaml")
                .with_description("The generated manifest in YAML format."),
        )
        .with_attribute(build_metadata_attribute());

    if let Some(spec) = build_spec_attribute(kind, crd)? {
        schema = schema.with_attribute(spec);
    }

    debug!(
        type_name = %kind.type_name,
        attributes = schema.attributes.len(),
        "Built data source schema"
    );

    Ok(schema)
}

fn build_metadata_attribute() -> Attribute {
    let metadata = Schema::new()
        .with_attribute(
            Attribute::required_string("name")
                .with_description(
                    "Unique identifier for this object within its namespace.",
                )
                .with_validator(Validator::ObjectName),
        )
        .with_attribute(
            Attribute::required_string("namespace")
                .with_description("Namespace of this object, must be a valid DNS label.")
                .with_validator(Validator::Namespace),
        )
        .with_attribute(
            Attribute::new("labels", AttributeType::Map(Box::new(AttributeType::String)))
                .optional()
                .with_description(
                    "Map of string keys and values that can be used to organize and categorize \
                     objects.",
                )
                .with_validator(Validator::Labels),
        )
        .with_attribute(
            Attribute::new(
                "annotations",
                AttributeType::Map(Box::new(AttributeType::String)),
            )
            .optional()
            .with_description(
                "Unstructured key value map stored with a resource that may be set by external \
                 tools.",
            )
            .with_validator(Validator::Annotations),
        );

    Attribute::new("metadata", AttributeType::Object(metadata))
        .required()
        .with_description("Data that helps uniquely identify this object.")
}

/// Derive the `spec` attribute from the served version of the CRD
fn build_spec_attribute(
    kind: &ManifestKind,
    crd: &CustomResourceDefinition,
) -> Result<Option<Attribute>> {
    let version = crd
        .spec
        .versions
        .iter()
        .find(|v| v.name == kind.version)
        .ok_or_else(|| {
            Error::Schema(format!(
                "CRD {} does not serve version {}",
                crd.spec.names.kind, kind.version
            ))
        })?;

    let root = version
        .schema
        .as_ref()
        .and_then(|v| v.open_api_v3_schema.as_ref())
        .ok_or_else(|| {
            Error::Schema(format!(
                "CRD {} has no OpenAPI v3 schema",
                crd.spec.names.kind
            ))
        })?;

    let Some(spec) = root.properties.as_ref().and_then(|p| p.get("spec")) else {
        return Ok(None);
    };

    let spec_type = attribute_type(spec)?;
    let required = matches!(&spec_type, AttributeType::Object(schema) if schema.has_required());

    let mut attribute = Attribute::new("spec", spec_type);
    attribute = if required {
        attribute.required()
    } else {
        attribute.optional()
    };
    if let Some(description) = &spec.description {
        attribute = attribute.with_description(description.clone());
    }

    Ok(Some(attribute))
}

/// Map one OpenAPI property onto an attribute type
fn attribute_type(props: &JSONSchemaProps) -> Result<AttributeType> {
    if let Some(merged) = single_all_of(props) {
        return attribute_type(merged);
    }

    if props.x_kubernetes_int_or_string == Some(true) {
        return Ok(AttributeType::Dynamic);
    }

    let attr_type = match props.type_.as_deref() {
        Some("string") => AttributeType::String,
        Some("integer") if props.format.as_deref() == Some("int32") => AttributeType::Int32,
        Some("integer") => AttributeType::Int64,
        Some("number") => AttributeType::Float64,
        Some("boolean") => AttributeType::Bool,
        Some("array") => match &props.items {
            Some(JSONSchemaPropsOrArray::Schema(item)) => {
                AttributeType::List(Box::new(attribute_type(item)?))
            }
            Some(JSONSchemaPropsOrArray::Schemas(items)) if items.len() == 1 => {
                AttributeType::List(Box::new(attribute_type(&items[0])?))
            }
            _ => AttributeType::List(Box::new(AttributeType::Dynamic)),
        },
        Some("object") => match (&props.properties, &props.additional_properties) {
            (Some(properties), _) if !properties.is_empty() => {
                AttributeType::Object(object_schema(props)?)
            }
            (_, Some(JSONSchemaPropsOrBool::Schema(values))) => {
                AttributeType::Map(Box::new(attribute_type(values)?))
            }
            _ => AttributeType::Dynamic,
        },
        _ => AttributeType::Dynamic,
    };

    Ok(attr_type)
}

fn object_schema(props: &JSONSchemaProps) -> Result<Schema> {
    let required = props.required.as_deref().unwrap_or_default();
    let mut schema = Schema::new();
    if let Some(description) = &props.description {
        schema = schema.with_description(description.clone());
    }

    for (wire_name, child) in props.properties.iter().flatten() {
        let mut attribute = Attribute::new(to_snake_case(wire_name), attribute_type(child)?)
            .with_wire_name(wire_name);
        attribute = if required.contains(wire_name) {
            attribute.required()
        } else {
            attribute.optional()
        };
        if let Some(description) = &child.description {
            if let Some(message) = deprecation_notice(description) {
                attribute = attribute.deprecated(message);
            }
            attribute = attribute.with_description(description.clone());
        }
        schema = schema.with_attribute(attribute);
    }

    Ok(schema)
}

/// Unwrap `allOf: [x]` wrappers that carry no type of their own
fn single_all_of(props: &JSONSchemaProps) -> Option<&JSONSchemaProps> {
    match props.all_of.as_deref() {
        Some([only]) if props.type_.is_none() && props.properties.is_none() => Some(only),
        _ => None,
    }
}

/// Kubernetes API docs flag deprecated fields with a `Deprecated:` paragraph
fn deprecation_notice(description: &str) -> Option<String> {
    let (_, notice) = description.split_once("Deprecated:")?;
    let notice = notice.trim();
    Some(if notice.is_empty() {
        "This attribute is deprecated.".to_string()
    } else {
        notice.to_string()
    })
}
