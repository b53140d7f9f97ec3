//! Manifest data sources, one per k8up kind

mod manifest;

pub use manifest::ManifestDataSource;

use serde_json::Value;

use crate::crd::{Archive, Backup, Check, PreBackupPod, Prune, Restore, Schedule};
use crate::schema::Schema;
use crate::Result;

/// A read-only data source
pub trait DataSource: Send + Sync {
    /// Type name the data source is registered under
    fn type_name(&self) -> &str;

    /// Static schema of the data source
    fn schema(&self) -> &Schema;

    /// Produce the data source state from a validated configuration
    fn read(&self, config: &Value) -> Result<Value>;
}

/// Build every manifest data source with type names under `prefix`
pub fn all(prefix: &str) -> Result<Vec<Box<dyn DataSource>>> {
    Ok(vec![
        Box::new(ManifestDataSource::<Archive>::new(prefix)?),
        Box::new(ManifestDataSource::<Backup>::new(prefix)?),
        Box::new(ManifestDataSource::<Check>::new(prefix)?),
        Box::new(ManifestDataSource::<PreBackupPod>::new(prefix)?),
        Box::new(ManifestDataSource::<Prune>::new(prefix)?),
        Box::new(ManifestDataSource::<Restore>::new(prefix)?),
        Box::new(ManifestDataSource::<Schedule>::new(prefix)?),
    ])
}
