//! Prune custom resource

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{JobHistorySpec, RunnableSpec};

/// PruneSpec needs to contain the repository information as well as the desired
/// retention policies.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "k8up.io",
    version = "v1",
    kind = "Prune",
    plural = "prunes",
    singular = "prune",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct PruneSpec {
    #[serde(flatten)]
    pub runnable: RunnableSpec,

    /// Retention sets how many backups should be kept after a forget and prune
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<RetentionPolicy>,

    #[serde(flatten)]
    pub history: JobHistorySpec,
}

/// Snapshot retention rules passed to `restic forget`
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RetentionPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_last: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_hourly: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_daily: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_weekly: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_monthly: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_yearly: Option<i64>,

    /// KeepTags keeps all snapshots which have all tags specified by this option
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_tags: Option<Vec<String>>,

    /// Hostnames is a list of hostnames to filter snapshots by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostnames: Option<Vec<String>>,
}
