//! CRD YAML Generator
//!
//! This binary generates Kubernetes CRD manifests for all k8up custom resources
//! the provider exposes as manifest data sources.
//!
//! Usage: cargo run --bin crdgen > deploy/crds/k8up.yaml

use k8up_manifest_provider::crd::generate_crds;

fn main() -> anyhow::Result<()> {
    for crd in generate_crds()? {
        println!("---");
        print!("{}", crd);
    }
    Ok(())
}
