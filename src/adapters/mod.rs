//! Adapters between CRD types, Terraform configuration and rendered manifests

pub mod config_mapping;
pub mod manifest_yaml;
pub mod schema_builder;
