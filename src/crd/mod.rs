//! Custom Resource Definitions for the k8up.io API group

mod archive;
mod backup;
mod check;
mod common;
mod kind;
mod pre_backup_pod;
mod prune;
mod restore;
mod schedule;

pub use archive::*;
pub use backup::*;
pub use check::*;
pub use common::*;
pub use kind::*;
pub use pre_backup_pod::*;
pub use prune::*;
pub use restore::*;
pub use schedule::*;

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::CustomResourceExt;

use crate::Result;

/// API group served by every k8up resource
pub const GROUP: &str = "k8up.io";

/// All k8up custom resource definitions
pub fn crds() -> Vec<CustomResourceDefinition> {
    vec![
        Archive::crd(),
        Backup::crd(),
        Check::crd(),
        PreBackupPod::crd(),
        Prune::crd(),
        Restore::crd(),
        Schedule::crd(),
    ]
}

/// Generate CRD YAML manifests for all custom resources
pub fn generate_crds() -> Result<Vec<String>> {
    crds()
        .iter()
        .map(|crd| serde_yaml::to_string(crd).map_err(Into::into))
        .collect()
}
