//! Schedule custom resource

use k8s_openapi::api::core::v1::{LocalObjectReference, PodSecurityContext};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::archive::ArchiveSpec;
use super::backup::BackupSpec;
use super::check::CheckSpec;
use super::common::{Backend, ComputeResources, JobHistorySpec};
use super::prune::PruneSpec;
use super::restore::RestoreSpec;

/// ScheduleSpec defines the schedules for the various job types.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "k8up.io",
    version = "v1",
    kind = "Schedule",
    plural = "schedules",
    singular = "schedule",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSpec {
    /// RestoreSchedule manages schedules for the restore service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore: Option<RestoreSchedule>,

    /// BackupSchedule manages schedules for the backup service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<BackupSchedule>,

    /// ArchiveSchedule manages schedules for the archival service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive: Option<ArchiveSchedule>,

    /// CheckSchedule manages the schedules for the checks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<CheckSchedule>,

    /// PruneSchedule manages the schedules for the prunes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prune: Option<PruneSchedule>,

    /// Backend contains the restic repo where the job should backup to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<Backend>,

    #[serde(flatten)]
    pub history: JobHistorySpec,

    /// ResourceRequirementsTemplate describes the compute resource requirements
    /// (cpu, memory, etc.) applied to every job spawned by this schedule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_requirements_template: Option<ComputeResources>,

    /// PodSecurityContext describes the security context with which actions
    /// (such as backups) shall be executed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_security_context: Option<PodSecurityContext>,

    /// PodConfigRef optionally specifies a PodConfig to use as template for the job pods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_config_ref: Option<LocalObjectReference>,
}

/// Scheduling fields shared by every job schedule
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCommon {
    /// Schedule is a cron expression, or one of the k8up smart schedules
    /// (`@daily-random`, `@hourly-random`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrent_runs_allowed: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackupSchedule {
    #[serde(flatten)]
    pub common: ScheduleCommon,

    #[serde(flatten)]
    pub spec: BackupSpec,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckSchedule {
    #[serde(flatten)]
    pub common: ScheduleCommon,

    #[serde(flatten)]
    pub spec: CheckSpec,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PruneSchedule {
    #[serde(flatten)]
    pub common: ScheduleCommon,

    #[serde(flatten)]
    pub spec: PruneSpec,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestoreSchedule {
    #[serde(flatten)]
    pub common: ScheduleCommon,

    #[serde(flatten)]
    pub spec: RestoreSpec,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveSchedule {
    #[serde(flatten)]
    pub common: ScheduleCommon,

    #[serde(flatten)]
    pub spec: ArchiveSpec,
}
