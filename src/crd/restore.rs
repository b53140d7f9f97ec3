//! Restore custom resource

use k8s_openapi::api::core::v1::PersistentVolumeClaimVolumeSource;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{JobHistorySpec, RunnableSpec, S3Spec, TlsOptions};

/// RestoreSpec can either contain an S3 restore point or a local one. For the local
/// one you need to define an existing PVC.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "k8up.io",
    version = "v1",
    kind = "Restore",
    plural = "restores",
    singular = "restore",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct RestoreSpec {
    #[serde(flatten)]
    pub runnable: RunnableSpec,

    /// RestoreMethod contains how and where the restore should happen all the settings
    /// are mutual exclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_method: Option<RestoreMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_filter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<String>,

    #[serde(flatten)]
    pub history: JobHistorySpec,

    /// Tags is a list of arbitrary tags that get added to the backup via Restic's tagging system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Where restored data ends up
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestoreMethod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<S3Spec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<FolderRestore>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_options: Option<TlsOptions>,
}

/// Restore into an existing PersistentVolumeClaim
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FolderRestore {
    #[serde(flatten)]
    pub claim: PersistentVolumeClaimVolumeSource,
}
