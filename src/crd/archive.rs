//! Archive custom resource

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::restore::RestoreSpec;

/// ArchiveSpec defines the desired state of Archive.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "k8up.io",
    version = "v1",
    kind = "Archive",
    plural = "archives",
    singular = "archive",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveSpec {
    #[serde(flatten)]
    pub restore: RestoreSpec,
}
