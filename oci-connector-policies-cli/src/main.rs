//! Standalone CLI: scans an OCI tenancy and prints, for every resource a
//! service connector could read from or write to, the policy statements the
//! connector principal needs.

use anyhow::Context;
use clap::Parser;
use oci_connector_policies_core::{
    ConnectorPolicyService, OciConfig, DEFAULT_PROFILE, STATEMENT_SEPARATOR,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "oci-connector-policies",
    version,
    about = "Generate the IAM policy statements a service connector needs for every resource in a tenancy"
)]
struct Cli {
    /// OCID of the compartment that contains the service connectors. Every
    /// generated statement restricts the grant to connectors in this
    /// compartment.
    #[arg(long, env = "CONNECTOR_COMPARTMENT_ID", value_name = "OCID")]
    connector_compartment_id: String,

    /// Tenancy OCID to scan; defaults to the tenancy of the config profile.
    #[arg(long, value_name = "OCID")]
    tenancy_id: Option<String>,

    /// OCI config profile to use.
    #[arg(long, env = "OCI_CLI_PROFILE", default_value = DEFAULT_PROFILE)]
    profile: String,

    /// Path to the OCI config file; defaults to ~/.oci/config.
    #[arg(long, env = "OCI_CLI_CONFIG_FILE", value_name = "PATH")]
    config_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = cli.config_file.unwrap_or_else(OciConfig::default_path);
    let mut config = OciConfig::from_file(&config_path, &cli.profile)
        .with_context(|| format!("loading OCI config from {}", config_path.display()))?;
    if let Some(tenancy_id) = cli.tenancy_id {
        config.tenancy = tenancy_id;
    }

    let service = ConnectorPolicyService::from_config(&config)
        .context("initializing OCI service clients")?;

    let report = service
        .scan(&cli.connector_compartment_id)
        .await
        .context("scanning tenancy")?;

    for statement in &report.statements {
        println!("{statement}");
        println!("{STATEMENT_SEPARATOR}");
    }

    log::info!(
        "generated {} statements across {} compartments ({} listings degraded to empty)",
        report.statements.len(),
        report.compartments,
        report.suppressed_failures
    );
    Ok(())
}
