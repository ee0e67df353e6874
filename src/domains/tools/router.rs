//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::prompts::PromptRegistry;

use super::definitions::{ListLanguagesTool, PromptsByLanguageTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<PromptRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListLanguagesTool::create_route(registry.clone()))
        .with_route(PromptsByLanguageTool::create_route(registry))
}
