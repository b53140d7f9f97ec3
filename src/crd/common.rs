//! Types shared by every k8up job resource

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{
    ConfigMapVolumeSource, EnvFromSource, LocalObjectReference, PersistentVolumeClaimVolumeSource,
    PodSecurityContext, ResourceClaim, SecretKeySelector, SecretVolumeSource, VolumeMount,
};
use schemars::gen::SchemaGenerator;
use schemars::schema::{Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fields every k8up job (Backup, Check, Prune, Restore, Archive) can carry
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunnableSpec {
    /// Backend contains the restic repo where the job should backup to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<Backend>,

    /// Resources describes the compute resource requirements (cpu, memory, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ComputeResources>,

    /// PodSecurityContext describes the security context with which this action shall be executed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_security_context: Option<PodSecurityContext>,

    /// PodConfigRef optionally specifies a PodConfig to use as template for the job pods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_config_ref: Option<LocalObjectReference>,

    /// Volumes List of volumes that can be mounted by containers belonging to the pod.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<RunnableVolumeSpec>>,

    /// ActiveDeadlineSeconds specifies the duration in seconds relative to the startTime
    /// that the job may be continuously active before the system tries to terminate it.
    /// Value must be positive integer if given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_deadline_seconds: Option<i64>,
}

/// Retention of finished job objects
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobHistorySpec {
    /// KeepJobs amount of jobs to keep for later analysis.
    ///
    /// Deprecated: Use FailedJobsHistoryLimit and SuccessfulJobsHistoryLimit respectively.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_jobs: Option<i64>,

    /// FailedJobsHistoryLimit amount of failed jobs to keep for later analysis.
    /// KeepJobs is used property is not specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_jobs_history_limit: Option<i64>,

    /// SuccessfulJobsHistoryLimit amount of successful jobs to keep for later analysis.
    /// KeepJobs is used property is not specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_jobs_history_limit: Option<i64>,
}

/// A volume that job pods may mount
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunnableVolumeSpec {
    /// name of the volume. Must be a DNS_LABEL and unique within the pod.
    pub name: String,

    /// persistentVolumeClaimVolumeSource represents a reference to a PersistentVolumeClaim
    /// in the same namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_volume_claim: Option<PersistentVolumeClaimVolumeSource>,

    /// secret represents a secret that should populate this volume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<SecretVolumeSource>,

    /// configMap represents a configMap that should populate this volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map: Option<ConfigMapVolumeSource>,
}

/// Restic repository backend
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Backend {
    /// RepoPasswordSecretRef references a secret key to look up the restic repository password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_password_secret_ref: Option<SecretKeySelector>,

    /// EnvFrom adds all environment variables from a an external source to the Restic job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_from: Option<Vec<EnvFromSource>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<LocalSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<S3Spec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs: Option<GcsSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure: Option<AzureSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift: Option<SwiftSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub b2: Option<B2Spec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest: Option<RestServerSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_options: Option<TlsOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_mounts: Option<Vec<VolumeMount>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_path: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct S3Spec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,

    /// Selects a key of a secret in the pod's namespace
    #[serde(rename = "accessKeyIDSecretRef", skip_serializing_if = "Option::is_none")]
    pub access_key_id_secret_ref: Option<SecretKeySelector>,

    /// Selects a key of a secret in the pod's namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_access_key_secret_ref: Option<SecretKeySelector>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GcsSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,

    /// Selects a key of a secret in the pod's namespace
    #[serde(rename = "projectIDSecretRef", skip_serializing_if = "Option::is_none")]
    pub project_id_secret_ref: Option<SecretKeySelector>,

    /// Selects a key of a secret in the pod's namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_secret_ref: Option<SecretKeySelector>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AzureSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Selects a key of a secret in the pod's namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name_secret_ref: Option<SecretKeySelector>,

    /// Selects a key of a secret in the pod's namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_key_secret_ref: Option<SecretKeySelector>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwiftSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct B2Spec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Selects a key of a secret in the pod's namespace
    #[serde(rename = "accountIDSecretRef", skip_serializing_if = "Option::is_none")]
    pub account_id_secret_ref: Option<SecretKeySelector>,

    /// Selects a key of a secret in the pod's namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_key_secret_ref: Option<SecretKeySelector>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestServerSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Selects a key of a secret in the pod's namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_secret_ref: Option<SecretKeySelector>,

    /// Selects a key of a secret in the pod's namespace
    // k8up ships the field under this name
    #[serde(rename = "passwordSecretReg", skip_serializing_if = "Option::is_none")]
    pub password_secret_ref: Option<SecretKeySelector>,
}

/// TLS material mounted into the restic container
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TlsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_cert: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_key: Option<String>,
}

/// Compute resource requirements of a job pod
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComputeResources {
    /// Claims lists the names of resources, defined in spec.resourceClaims,
    /// that are used by this container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<Vec<ResourceClaim>>,

    /// Limits describes the maximum amount of compute resources allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<BTreeMap<String, ResourceQuantity>>,

    /// Requests describes the minimum amount of compute resources required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests: Option<BTreeMap<String, ResourceQuantity>>,
}

/// A resource amount, either a plain number (`2`) or a suffixed string (`500m`, `1Gi`)
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ResourceQuantity {
    Number(i64),
    String(String),
}

impl JsonSchema for ResourceQuantity {
    fn schema_name() -> String {
        "ResourceQuantity".to_string()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        Schema::Object(SchemaObject {
            extensions: [(
                "x-kubernetes-int-or-string".to_string(),
                serde_json::Value::Bool(true),
            )]
            .into_iter()
            .collect(),
            ..Default::default()
        })
    }
}
