//! Glassix connectivity check.
//!
//! Loads credentials from the environment, acquires a bearer token and
//! lists the workspace tags, so a deployment can verify its configuration
//! before wiring the SDK into a service.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `GLASSIX_WORKSPACE`, `GLASSIX_USER_NAME`, `GLASSIX_API_KEY`,
//!   `GLASSIX_API_SECRET`: required
//! - `GLASSIX_TIMEOUT_SECS`, `GLASSIX_TESTING`: optional
//! - `RUST_LOG`: log filter (default `glassix=info`)

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use glassix::{Credentials, GlassixClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("glassix=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Glassix connectivity check v{}", env!("CARGO_PKG_VERSION"));

    let credentials = Credentials::from_env().context("Failed to load credentials")?;
    let client = GlassixClient::new(credentials).context("Failed to create Glassix client")?;

    tracing::info!(base_url = client.base_url(), "Authenticating");
    client
        .authenticate()
        .await
        .context("Failed to obtain an access token")?;

    let tags = client
        .tenants()
        .tags()
        .await
        .context("Failed to list workspace tags")?;

    tracing::info!(count = tags.len(), "Connected");
    for tag in tags.iter().filter(|t| !t.is_deleted) {
        println!("{}", tag.name);
    }

    Ok(())
}
