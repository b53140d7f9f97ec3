//! Per-kind constants for manifest data sources

use kube::{CustomResourceExt, Resource};
use serde::{de::DeserializeOwned, Serialize};

use super::{
    Archive, ArchiveSpec, Backup, BackupSpec, Check, CheckSpec, PreBackupPod, PreBackupPodSpec,
    Prune, PruneSpec, Restore, RestoreSpec, Schedule, ScheduleSpec,
};

/// A k8up custom resource that can be rendered as a manifest
pub trait K8upResource: Resource<DynamicType = ()> + CustomResourceExt {
    /// The `spec` payload of the resource
    type Spec: Serialize + DeserializeOwned + Send + Sync + 'static;
}

macro_rules! k8up_resource {
    ($($kind:ty => $spec:ty),* $(,)?) => {
        $(
            impl K8upResource for $kind {
                type Spec = $spec;
            }
        )*
    };
}

k8up_resource! {
    Archive => ArchiveSpec,
    Backup => BackupSpec,
    Check => CheckSpec,
    PreBackupPod => PreBackupPodSpec,
    Prune => PruneSpec,
    Restore => RestoreSpec,
    Schedule => ScheduleSpec,
}

/// Fixed identity of one manifest data source
///
/// `api_version` and `kind` are stamped onto every rendered manifest and are
/// never taken from user configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestKind {
    pub api_version: String,
    pub group: String,
    pub version: String,
    pub kind: String,
    /// Data source type name, e.g. `k8s_k8up_io_check_v1_manifest`
    pub type_name: String,
}

impl ManifestKind {
    /// Constants for resource `K`, with data source names under `prefix`
    pub fn of<K: K8upResource>(prefix: &str) -> Self {
        let group = K::group(&()).into_owned();
        let version = K::version(&()).into_owned();
        let kind = K::kind(&()).into_owned();
        let type_name = format!(
            "{}_{}_{}_{}_manifest",
            prefix,
            group.replace(['.', '-'], "_"),
            to_snake_case(&kind),
            version
        );

        Self {
            api_version: K::api_version(&()).into_owned(),
            group,
            version,
            kind,
            type_name,
        }
    }
}

/// Convert a Kubernetes camelCase field name to a snake_case attribute name
///
/// Acronym runs stay together: `promURL` becomes `prom_url` and
/// `accessKeyIDSecretRef` becomes `access_key_id_secret_ref`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1);
            let boundary = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_conversion() {
        assert_eq!(to_snake_case("promURL"), "prom_url");
        assert_eq!(to_snake_case("accessKeyIDSecretRef"), "access_key_id_secret_ref");
        assert_eq!(to_snake_case("passwordSecretReg"), "password_secret_reg");
        assert_eq!(to_snake_case("PreBackupPod"), "pre_backup_pod");
        assert_eq!(to_snake_case("b2"), "b2");
        assert_eq!(to_snake_case("hostIPC"), "host_ipc");
        assert_eq!(to_snake_case("x-kubernetes"), "x_kubernetes");
    }

    #[test]
    fn test_manifest_kind_constants() {
        let kind = ManifestKind::of::<Check>("k8s");
        assert_eq!(kind.api_version, "k8up.io/v1");
        assert_eq!(kind.kind, "Check");
        assert_eq!(kind.type_name, "k8s_k8up_io_check_v1_manifest");

        let kind = ManifestKind::of::<PreBackupPod>("k8s");
        assert_eq!(kind.type_name, "k8s_k8up_io_pre_backup_pod_v1_manifest");
    }
}
