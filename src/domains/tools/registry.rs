//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool names, for checking the router in tests

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use crate::domains::prompts::PromptRegistry;

#[cfg(feature = "http")]
use super::ToolError;
#[cfg(any(test, feature = "http"))]
use super::definitions::{ListLanguagesTool, PromptsByLanguageTool};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    prompts: Arc<PromptRegistry>,
}

impl ToolRegistry {
    /// Create a new tool registry over the given prompt registry.
    pub fn new(prompts: Arc<PromptRegistry>) -> Self {
        Self { prompts }
    }

    /// Get all tool names.
    #[cfg(test)]
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![ListLanguagesTool::NAME, PromptsByLanguageTool::NAME]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            ListLanguagesTool::NAME => ListLanguagesTool::http_handler(arguments, self.prompts.clone()),
            PromptsByLanguageTool::NAME => {
                PromptsByLanguageTool::http_handler(arguments, self.prompts.clone())
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name).to_string())
            }
        }
    }
}
