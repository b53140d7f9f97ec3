//! Integration tests for loading data source configuration files

use std::io::Write;

use k8up_manifest_provider::config::{load_data_source_config, ProviderConfig};
use k8up_manifest_provider::Provider;
use serde_json::json;
use tempfile::NamedTempFile;

// ============================================================================
// Test Helpers
// ============================================================================

fn write_config(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

// ============================================================================
// Loading Tests
// ============================================================================

#[test]
fn loads_json_config() {
    let file = write_config(
        ".json",
        r#"{"metadata": {"name": "db-check", "namespace": "backup"}}"#,
    );

    let config = load_data_source_config(file.path()).unwrap();
    assert_eq!(
        config,
        json!({"metadata": {"name": "db-check", "namespace": "backup"}})
    );
}

#[test]
fn loads_yaml_config() {
    let file = write_config(
        ".yaml",
        "metadata:\n  name: db-check\n  namespace: backup\nspec:\n  prom_url: http://prom:9090\n",
    );

    let config = load_data_source_config(file.path()).unwrap();
    assert_eq!(config["metadata"]["name"], "db-check");
    assert_eq!(config["spec"]["prom_url"], "http://prom:9090");
}

#[test]
fn invalid_json_is_a_config_error() {
    let file = write_config(".json", "{not json");

    let err = load_data_source_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("invalid JSON"), "{}", err);
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = load_data_source_config(&path).unwrap_err();
    assert!(err.to_string().contains("failed to read"), "{}", err);
}

// ============================================================================
// Render From File Tests
// ============================================================================

#[test]
fn loaded_yaml_config_renders_manifest() {
    let file = write_config(
        ".yml",
        "metadata:\n  name: nightly\n  namespace: backup\nspec:\n  tags:\n    - db\n",
    );
    let config = load_data_source_config(file.path()).unwrap();

    let provider = Provider::new(ProviderConfig::default()).unwrap();
    let response = provider.read_data_source("k8s_k8up_io_backup_v1_manifest", &config);
    assert!(!response.has_errors(), "{:?}", response.diagnostics);

    let state = response.state.unwrap();
    let manifest: serde_yaml::Value =
        serde_yaml::from_str(state["yaml"].as_str().unwrap()).unwrap();
    assert_eq!(manifest["kind"].as_str(), Some("Backup"));
    assert_eq!(manifest["spec"]["tags"][0].as_str(), Some("db"));
}
