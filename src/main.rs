//! k8up manifest CLI
//!
//! Renders k8up manifests offline through the same data sources the provider
//! serves, and prints their schemas.

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use k8up_manifest_provider::config::{load_data_source_config, ProviderConfig};
use k8up_manifest_provider::Provider;

/// Environment variable switching log output to JSON
const LOG_JSON_ENV: &str = "K8UP_PROVIDER_LOG_JSON";

#[derive(Parser)]
#[command(name = "k8up-manifest")]
#[command(about = "Render k8up.io manifests from data source configuration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered data source type names
    List,

    /// Print the schema of a data source as JSON
    Schema {
        /// Data source type name, e.g. k8s_k8up_io_check_v1_manifest
        type_name: String,
    },

    /// Render a manifest from a JSON or YAML configuration file
    Render {
        /// Data source type name, e.g. k8s_k8up_io_check_v1_manifest
        type_name: String,

        /// Configuration file path
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let provider = Provider::new(ProviderConfig::from_env()?)?;

    match cli.command {
        Commands::List => {
            for name in provider.data_source_names() {
                println!("{}", name);
            }
        }
        Commands::Schema { type_name } => {
            let schema = provider.schema(&type_name)?;
            println!("{}", serde_json::to_string_pretty(schema)?);
        }
        Commands::Render { type_name, config } => {
            let config = load_data_source_config(&config)?;
            let response = provider.read_data_source(&type_name, &config);

            for diagnostic in &response.diagnostics {
                eprintln!("{}", diagnostic);
            }

            let Some(yaml) = response
                .state
                .as_ref()
                .and_then(|state| state.get("yaml"))
                .and_then(Value::as_str)
            else {
                error!(type_name = %type_name, "Rendering failed");
                bail!("failed to render {}", type_name);
            };
            print!("{}", yaml);
        }
    }

    Ok(())
}

/// Initialize tracing subscriber
///
/// Logs go to stderr so rendered manifests on stdout stay clean.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,k8up_manifest_provider=info"));

    let json = std::env::var(LOG_JSON_ENV).is_ok_and(|v| v == "true" || v == "1");
    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
