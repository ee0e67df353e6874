//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging, builds the prompt registry and
//! serves it over the configured transport.

use anyhow::Result;
use tracing::{info, warn};

use mcp_local_context::core::{Config, McpServer, TransportService, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging depends on the config, so a load failure is reported after init
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::from_env(), Some(e)),
    };

    logging::init(&config.logging)?;

    if let Some(e) = load_error {
        warn!("Using default configuration: {}", e);
    }

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config.clone());

    info!(
        prompts = server.prompt_service().registry().all_prompts().len(),
        "Server initialized"
    );

    TransportService::new(config.transport).run(server).await?;

    info!("Server shutting down");

    Ok(())
}
