//! Festival forms - NocoDB provisioning for the festival call for participation
//!
//! Ensures that each form type (stands, ateliers, conferences) has its table
//! and its public form view in the configured NocoDB base.

mod cli;
mod config;
mod error;
mod forms;
mod nocodb;
mod provision;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::ApiConfig;
use nocodb::NocoDbClient;
use provision::Provisioner;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "festival_forms=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    // Missing credentials abort before any request is sent
    let config = ApiConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, base_id = %config.base_id, "Loaded NocoDB configuration");

    let client = NocoDbClient::new(&config)?;
    let provisioner = Provisioner::new(client, config.base_url.clone());

    let selected = cli.selected();
    let results = provisioner.provision_all(&selected).await;

    // Partial failures are logged but do not change the exit code
    for form_type in &selected {
        match results.get(form_type) {
            Some(result) if result.form_fallback => tracing::warn!(
                form_type = %form_type,
                table_id = %result.table_id,
                url = %result.form_url,
                "Table ready, form view missing"
            ),
            Some(result) => tracing::info!(form_type = %form_type, url = %result.form_url, "Form ready"),
            None => tracing::error!(form_type = %form_type, "Not provisioned"),
        }
    }
    tracing::info!(
        provisioned = results.len(),
        requested = selected.len(),
        "Provisioning finished"
    );

    Ok(())
}
