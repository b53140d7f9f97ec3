//! Backup custom resource

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{JobHistorySpec, RunnableSpec};

/// BackupSpec defines a single backup. It must contain all information to connect to
/// the backup repository when applied. If used with defaults or schedules the operator will
/// ensure that the defaults are applied before creating the object on the API.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "k8up.io",
    version = "v1",
    kind = "Backup",
    plural = "backups",
    singular = "backup",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct BackupSpec {
    #[serde(flatten)]
    pub runnable: RunnableSpec,

    #[serde(flatten)]
    pub history: JobHistorySpec,

    /// PromURL sets a prometheus push URL where the backup container send metrics to
    #[serde(rename = "promURL", skip_serializing_if = "Option::is_none")]
    pub prom_url: Option<String>,

    /// StatsURL sets an arbitrary URL where the restic container posts metrics and
    /// information about the snapshots to. This is in addition to the prometheus
    /// pushgateway.
    #[serde(rename = "statsURL", skip_serializing_if = "Option::is_none")]
    pub stats_url: Option<String>,

    /// Tags is a list of arbitrary tags that get added to the backup via Restic's tagging system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
