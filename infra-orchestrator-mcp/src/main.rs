//! MCP Server entry point for Infra Orchestrator
//!
//! Starts the MCP server with stdio transport. Credentials come from the
//! process environment:
//!
//! - `CLOUDFLARE_API_TOKEN` + `CLOUDFLARE_ACCOUNT_ID`
//! - `NAMECHEAP_API_USER` + `NAMECHEAP_API_KEY` (+ optional
//!   `NAMECHEAP_USERNAME`, defaulting to the API user)
//!
//! A missing variable in either pair is fatal at startup.

mod schemas;
mod server;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use infra_orchestrator_provider::{CloudflareProvider, NamecheapProvider};
use rmcp::ServiceExt;
use server::InfraOrchestratorMcp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

struct Credentials {
    cloudflare_api_token: String,
    cloudflare_account_id: String,
    namecheap_api_user: String,
    namecheap_api_key: String,
    namecheap_username: Option<String>,
}

fn require_env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("missing required environment variable {name}"))
}

fn load_credentials() -> anyhow::Result<Credentials> {
    Ok(Credentials {
        cloudflare_api_token: require_env("CLOUDFLARE_API_TOKEN")?,
        cloudflare_account_id: require_env("CLOUDFLARE_ACCOUNT_ID")?,
        namecheap_api_user: require_env("NAMECHEAP_API_USER")?,
        namecheap_api_key: require_env("NAMECHEAP_API_KEY")?,
        namecheap_username: std::env::var("NAMECHEAP_USERNAME").ok(),
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing to stderr (MCP uses stdout for protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Starting Infra Orchestrator MCP Server");

    let credentials = match load_credentials() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to load credentials: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let cloudflare = Arc::new(CloudflareProvider::new(
        credentials.cloudflare_api_token,
        credentials.cloudflare_account_id,
    ));
    let namecheap = Arc::new(NamecheapProvider::new(
        credentials.namecheap_api_user,
        credentials.namecheap_api_key,
        credentials.namecheap_username,
    ));

    let mcp_server = InfraOrchestratorMcp::new(cloudflare, namecheap);

    // Start serving via stdio
    tracing::info!("Starting MCP server on stdio transport");
    let service = match mcp_server.serve(rmcp::transport::stdio()).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start MCP server: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Wait for the server to complete
    if let Err(e) = service.waiting().await {
        tracing::error!("MCP server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
