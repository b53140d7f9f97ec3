//! Check custom resource

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{JobHistorySpec, RunnableSpec};

/// CheckSpec defines the desired state of Check. It needs to contain the repository
/// information.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "k8up.io",
    version = "v1",
    kind = "Check",
    plural = "checks",
    singular = "check",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct CheckSpec {
    #[serde(flatten)]
    pub runnable: RunnableSpec,

    /// PromURL sets a prometheus push URL where the backup container send metrics to
    #[serde(rename = "promURL", skip_serializing_if = "Option::is_none")]
    pub prom_url: Option<String>,

    #[serde(flatten)]
    pub history: JobHistorySpec,
}
