//! Integration tests for data source schemas and CRD generation

use k8up_manifest_provider::config::ProviderConfig;
use k8up_manifest_provider::crd::{crds, generate_crds, GROUP};
use k8up_manifest_provider::schema::{Attribute, AttributeType, Schema};
use k8up_manifest_provider::validation::Validator;
use k8up_manifest_provider::Provider;

// ============================================================================
// Test Helpers
// ============================================================================

fn provider() -> Provider {
    Provider::new(ProviderConfig::default()).expect("provider should build")
}

fn schema_of<'a>(provider: &'a Provider, kind: &str) -> &'a Schema {
    provider
        .schema(&format!("k8s_k8up_io_{}_v1_manifest", kind))
        .expect("data source should be registered")
}

// ============================================================================
// Registration Tests
// ============================================================================

#[test]
fn provider_registers_every_kind() {
    let provider = provider();
    let names: Vec<&str> = provider.data_source_names().collect();
    assert_eq!(
        names,
        vec![
            "k8s_k8up_io_archive_v1_manifest",
            "k8s_k8up_io_backup_v1_manifest",
            "k8s_k8up_io_check_v1_manifest",
            "k8s_k8up_io_pre_backup_pod_v1_manifest",
            "k8s_k8up_io_prune_v1_manifest",
            "k8s_k8up_io_restore_v1_manifest",
            "k8s_k8up_io_schedule_v1_manifest",
        ]
    );
}

#[test]
fn custom_prefix_changes_type_names() {
    let provider = Provider::new(ProviderConfig {
        type_name_prefix: "kube".to_string(),
    })
    .unwrap();
    assert_eq!(provider.config().type_name_prefix, "kube");
    assert!(provider
        .data_source_names()
        .all(|name| name.starts_with("kube_k8up_io_")));
}

#[test]
fn invalid_prefix_is_rejected() {
    let result = Provider::new(ProviderConfig {
        type_name_prefix: "K8s!".to_string(),
    });
    assert!(result.is_err());
    assert!(result
        .err()
        .unwrap()
        .to_string()
        .to_lowercase()
        .contains("prefix"));
}

// ============================================================================
// Schema Shape Tests
// ============================================================================

#[test]
fn every_schema_passes_implementation_checks() {
    let provider = provider();
    for (name, schema) in provider.schemas() {
        if let Err(e) = schema.validate_implementation() {
            panic!("{} schema is inconsistent: {}", name, e);
        }
    }
}

#[test]
fn common_attributes_are_declared() {
    let provider = provider();
    for (name, schema) in provider.schemas() {
        let yaml = schema.attribute("yaml").expect("yaml attribute");
        assert!(yaml.is_read_only(), "{}: yaml must be computed", name);
        assert!(schema.attribute("id").unwrap().is_read_only());

        let metadata = schema.attribute("metadata").expect("metadata attribute");
        assert!(metadata.required, "{}: metadata must be required", name);

        let meta_name = schema.lookup("metadata.name").unwrap();
        assert!(meta_name.required);
        assert_eq!(meta_name.validators, vec![Validator::ObjectName]);

        let namespace = schema.lookup("metadata.namespace").unwrap();
        assert!(namespace.required);
        assert_eq!(namespace.validators, vec![Validator::Namespace]);

        let labels = schema.lookup("metadata.labels").unwrap();
        assert!(labels.optional);
        assert_eq!(labels.validators, vec![Validator::Labels]);

        let annotations = schema.lookup("metadata.annotations").unwrap();
        assert_eq!(annotations.validators, vec![Validator::Annotations]);
    }
}

#[test]
fn check_spec_mirrors_crd_fields() {
    let provider = provider();
    let schema = schema_of(&provider, "check");

    let spec = schema.attribute("spec").unwrap();
    assert!(spec.optional);

    let prom_url = schema.lookup("spec.prom_url").unwrap();
    assert_eq!(prom_url.wire_name, "promURL");
    assert_eq!(prom_url.attr_type, AttributeType::String);
    assert!(prom_url.optional);

    let deadline = schema.lookup("spec.active_deadline_seconds").unwrap();
    assert_eq!(deadline.attr_type, AttributeType::Int64);

    let bucket = schema.lookup("spec.backend.s3.bucket").unwrap();
    assert_eq!(bucket.attr_type, AttributeType::String);

    let secret_ref = schema
        .lookup("spec.backend.s3.access_key_id_secret_ref")
        .unwrap();
    assert_eq!(secret_ref.wire_name, "accessKeyIDSecretRef");
    assert!(secret_ref.nested().is_some());

    assert!(schema.lookup("spec.tags").is_none());
}

#[test]
fn deprecated_fields_carry_a_message() {
    let provider = provider();
    let schema = schema_of(&provider, "check");

    let keep_jobs = schema.lookup("spec.keep_jobs").unwrap();
    assert!(keep_jobs
        .deprecation_message
        .as_deref()
        .is_some_and(|m| m.contains("SuccessfulJobsHistoryLimit")));
    assert!(schema
        .lookup("spec.failed_jobs_history_limit")
        .unwrap()
        .deprecation_message
        .is_none());
}

#[test]
fn collection_fields_have_collection_types() {
    let provider = provider();
    let schema = schema_of(&provider, "backup");

    let tags = schema.lookup("spec.tags").unwrap();
    assert_eq!(
        tags.attr_type,
        AttributeType::List(Box::new(AttributeType::String))
    );

    let volumes = schema.lookup("spec.volumes").unwrap();
    match &volumes.attr_type {
        AttributeType::List(elem) => match elem.as_ref() {
            AttributeType::Object(volume) => {
                assert!(volume.attribute("name").unwrap().required);
            }
            other => panic!("volumes should hold objects, got {:?}", other),
        },
        other => panic!("volumes should be a list, got {:?}", other),
    }
}

#[test]
fn integer_widths_and_quantities_are_typed() {
    let provider = provider();

    let port = schema_of(&provider, "pre_backup_pod")
        .lookup("spec.pod.spec.containers")
        .and_then(|containers| match &containers.attr_type {
            AttributeType::List(elem) => match elem.as_ref() {
                AttributeType::Object(container) => container.lookup("ports"),
                _ => None,
            },
            _ => None,
        })
        .and_then(|ports| match &ports.attr_type {
            AttributeType::List(elem) => match elem.as_ref() {
                AttributeType::Object(port) => port.attribute("container_port").cloned(),
                _ => None,
            },
            _ => None,
        })
        .expect("container_port attribute");
    assert_eq!(port.attr_type, AttributeType::Int32);

    let limits = schema_of(&provider, "check")
        .lookup("spec.resources.limits")
        .unwrap();
    assert_eq!(
        limits.attr_type,
        AttributeType::Map(Box::new(AttributeType::Dynamic))
    );
}

#[test]
fn pre_backup_pod_spec_is_required() {
    let provider = provider();
    let schema = schema_of(&provider, "pre_backup_pod");

    assert!(schema.attribute("spec").unwrap().required);
    let command = schema.lookup("spec.backup_command").unwrap();
    assert!(command.required);
    assert_eq!(command.wire_name, "backupCommand");
}

#[test]
fn schema_serializes_to_json() {
    let provider = provider();
    let json = serde_json::to_value(schema_of(&provider, "check")).unwrap();

    let attributes = json["attributes"].as_array().unwrap();
    assert!(attributes.iter().any(|a| a["name"] == "yaml"));
    assert!(attributes.iter().any(|a| a["name"] == "spec"));
}

// ============================================================================
// Implementation Check Tests
// ============================================================================

#[test]
fn required_and_computed_attribute_is_rejected() {
    let schema = Schema::new().with_attribute(Attribute::required_string("name").computed());
    let err = schema.validate_implementation().unwrap_err();
    assert!(err.to_string().contains("required and computed"));
}

#[test]
fn attribute_without_flags_is_rejected() {
    let schema = Schema::new().with_attribute(Attribute::new("name", AttributeType::String));
    assert!(schema.validate_implementation().is_err());
}

#[test]
fn uppercase_attribute_name_is_rejected() {
    let schema = Schema::new().with_attribute(Attribute::optional_string("promURL"));
    assert!(schema.validate_implementation().is_err());
}

#[test]
fn duplicate_wire_name_is_rejected() {
    let schema = Schema::new()
        .with_attribute(Attribute::optional_string("a").with_wire_name("x"))
        .with_attribute(Attribute::optional_string("b").with_wire_name("x"));
    assert!(schema.validate_implementation().is_err());
}

#[test]
fn nested_inconsistency_is_found() {
    let nested = Schema::new().with_attribute(Attribute::required_string("x").computed());
    let schema =
        Schema::new().with_attribute(Attribute::new("obj", AttributeType::Object(nested)).optional());
    let err = schema.validate_implementation().unwrap_err();
    assert!(err.to_string().contains("obj.x"));
}

#[test]
fn misplaced_validator_is_rejected() {
    let schema = Schema::new().with_attribute(
        Attribute::new("count", AttributeType::Int64)
            .optional()
            .with_validator(Validator::Labels),
    );
    assert!(schema.validate_implementation().is_err());
}

// ============================================================================
// CRD Generation Tests
// ============================================================================

#[test]
fn crds_cover_every_kind() {
    let crds = crds();
    assert_eq!(crds.len(), 7);
    for crd in &crds {
        assert_eq!(crd.spec.group, GROUP);
        assert_eq!(crd.spec.scope, "Namespaced");
    }
}

#[test]
fn generated_crd_yaml_parses() {
    for yaml in generate_crds().unwrap() {
        let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(
            doc["kind"].as_str(),
            Some("CustomResourceDefinition")
        );
    }
}
