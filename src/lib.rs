//! k8up manifest data sources
//!
//! Read-only Terraform data sources for the `k8up.io` custom resources. Each
//! data source exposes a schema mirroring one CRD and renders the configured
//! resource as a YAML manifest with `apiVersion` and `kind` filled in.

pub mod adapters;
pub mod config;
pub mod crd;
pub mod datasources;
pub mod diagnostics;
pub mod error;
pub mod provider;
pub mod schema;
pub mod validation;

pub use error::{Error, Result};
pub use provider::{Provider, ReadResponse};
