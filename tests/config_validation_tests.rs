//! Integration tests for configuration validation
//!
//! These tests verify that data source configurations are checked against
//! their schemas before any manifest is rendered.

use k8up_manifest_provider::config::ProviderConfig;
use k8up_manifest_provider::diagnostics::{has_errors, Diagnostic};
use k8up_manifest_provider::Provider;
use serde_json::{json, Value};

// ============================================================================
// Test Helpers
// ============================================================================

const CHECK: &str = "k8s_k8up_io_check_v1_manifest";

fn validate(config: Value) -> Vec<Diagnostic> {
    let provider = Provider::new(ProviderConfig::default()).unwrap();
    provider.validate_data_source_config(CHECK, &config)
}

fn valid_config() -> Value {
    json!({
        "metadata": {"name": "db-check", "namespace": "backup"},
        "spec": {"prom_url": "http://prom:9090"}
    })
}

fn assert_error_at(diagnostics: &[Diagnostic], path: &str) {
    assert!(
        diagnostics
            .iter()
            .any(|d| d.is_error() && d.attribute.as_deref() == Some(path)),
        "expected an error at {}, got {:?}",
        path,
        diagnostics
    );
}

// ============================================================================
// Basic Validation Tests
// ============================================================================

#[test]
fn valid_config_passes_validation() {
    let diagnostics = validate(valid_config());
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
}

#[test]
fn non_object_config_fails_validation() {
    let diagnostics = validate(json!("db-check"));
    assert!(has_errors(&diagnostics));
}

#[test]
fn missing_metadata_fails_validation() {
    let diagnostics = validate(json!({"spec": null}));
    assert_error_at(&diagnostics, "metadata");
}

#[test]
fn missing_namespace_fails_validation() {
    let diagnostics = validate(json!({"metadata": {"name": "db-check"}}));
    assert_error_at(&diagnostics, "metadata.namespace");
}

#[test]
fn unknown_attribute_fails_validation() {
    let mut config = valid_config();
    config["spec"]["schedule"] = json!("@daily");

    let diagnostics = validate(config);
    assert_error_at(&diagnostics, "spec.schedule");
}

#[test]
fn setting_computed_yaml_fails_validation() {
    let mut config = valid_config();
    config["yaml"] = json!("apiVersion: v1");

    let diagnostics = validate(config);
    assert_error_at(&diagnostics, "yaml");
}

#[test]
fn wrong_type_fails_validation() {
    let mut config = valid_config();
    config["spec"]["prom_url"] = json!(9090);

    let diagnostics = validate(config);
    assert_error_at(&diagnostics, "spec.prom_url");
}

#[test]
fn fractional_integer_fails_validation() {
    let mut config = valid_config();
    config["spec"]["active_deadline_seconds"] = json!(1.5);

    let diagnostics = validate(config);
    assert_error_at(&diagnostics, "spec.active_deadline_seconds");
}

#[test]
fn deprecated_attribute_warns_without_failing() {
    let mut config = valid_config();
    config["spec"]["keep_jobs"] = json!(3);

    let diagnostics = validate(config);
    assert!(!has_errors(&diagnostics), "{:?}", diagnostics);
    let warning = diagnostics
        .iter()
        .find(|d| d.attribute.as_deref() == Some("spec.keep_jobs"))
        .expect("deprecation warning");
    assert_eq!(warning.summary, "Attribute Deprecated");
    assert!(warning.detail.contains("FailedJobsHistoryLimit"));
}

#[test]
fn out_of_range_int32_fails_validation() {
    let provider = Provider::new(ProviderConfig::default()).unwrap();
    let config = json!({
        "metadata": {"name": "mysqldump", "namespace": "default"},
        "spec": {
            "backup_command": "mysqldump --all-databases",
            "pod": {
                "spec": {
                    "containers": [{
                        "name": "mysqldump",
                        "image": "mysql:8",
                        "ports": [{"container_port": 1099511627776u64}]
                    }]
                }
            }
        }
    });

    let diagnostics =
        provider.validate_data_source_config("k8s_k8up_io_pre_backup_pod_v1_manifest", &config);
    assert_error_at(
        &diagnostics,
        "spec.pod.spec.containers[0].ports[0].container_port",
    );
}

// ============================================================================
// Name Validation Tests
// ============================================================================

#[test]
fn invalid_names_fail_validation() {
    for name in ["", "DB-Check", "db_check", "-db"] {
        let diagnostics = validate(json!({
            "metadata": {"name": name, "namespace": "backup"}
        }));
        assert_error_at(&diagnostics, "metadata.name");
    }
}

#[test]
fn dotted_name_passes_but_dotted_namespace_fails() {
    let diagnostics = validate(json!({
        "metadata": {"name": "db.check", "namespace": "backup"}
    }));
    assert!(!has_errors(&diagnostics), "{:?}", diagnostics);

    let diagnostics = validate(json!({
        "metadata": {"name": "db-check", "namespace": "backup.prod"}
    }));
    assert_error_at(&diagnostics, "metadata.namespace");
}

// ============================================================================
// Label And Annotation Validation Tests
// ============================================================================

#[test]
fn valid_labels_pass_validation() {
    let diagnostics = validate(json!({
        "metadata": {
            "name": "db-check",
            "namespace": "backup",
            "labels": {"app.kubernetes.io/name": "postgres", "tier": ""}
        }
    }));
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
}

#[test]
fn invalid_label_key_fails_validation() {
    let diagnostics = validate(json!({
        "metadata": {
            "name": "db-check",
            "namespace": "backup",
            "labels": {"bad key": "value"}
        }
    }));
    assert_error_at(&diagnostics, "metadata.labels");
}

#[test]
fn invalid_label_value_fails_validation() {
    let diagnostics = validate(json!({
        "metadata": {
            "name": "db-check",
            "namespace": "backup",
            "labels": {"tier": "not a valid value"}
        }
    }));
    assert_error_at(&diagnostics, "metadata.labels");
}

#[test]
fn annotation_values_are_free_form() {
    let diagnostics = validate(json!({
        "metadata": {
            "name": "db-check",
            "namespace": "backup",
            "annotations": {"example.com/description": "Nightly check, see runbook #4"}
        }
    }));
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
}

#[test]
fn invalid_annotation_key_fails_validation() {
    let diagnostics = validate(json!({
        "metadata": {
            "name": "db-check",
            "namespace": "backup",
            "annotations": {"Example.com/owner": "team"}
        }
    }));
    assert_error_at(&diagnostics, "metadata.annotations");
}

#[test]
fn null_map_value_fails_validation() {
    let diagnostics = validate(json!({
        "metadata": {
            "name": "db-check",
            "namespace": "backup",
            "labels": {"tier": null}
        }
    }));
    assert_error_at(&diagnostics, "metadata.labels[\"tier\"]");
}
