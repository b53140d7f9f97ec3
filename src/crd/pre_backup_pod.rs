//! PreBackupPod custom resource

use k8s_openapi::api::core::v1::PodTemplateSpec;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// PreBackupPodSpec define pods that will be launched during the backup. After the backup
/// has finished (successfully or not), they should be removed again automatically
/// by the operator.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "k8up.io",
    version = "v1",
    kind = "PreBackupPod",
    plural = "prebackuppods",
    singular = "prebackuppod",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct PreBackupPodSpec {
    /// BackupCommand will be added to the backupcommand annotation on the pod.
    pub backup_command: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,

    /// Pod describes the pod which should be started during the backup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod: Option<PodTemplateSpec>,
}
