//! STDIO transport implementation.
//!
//! JSON-RPC frames travel over stdin/stdout, so nothing else may write to
//! stdout while a session is active. Logging goes to stderr or a file.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single session over stdin/stdout until the client disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let prompt_count = server.prompt_service().registry().all_prompts().len();
        info!(prompt_count, "Ready - serving prompts over stdin/stdout");

        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        session
            .waiting()
            .await
            .map_err(|e| TransportError::session(e.to_string()))?;

        info!("Client closed the STDIO session");
        Ok(())
    }
}
