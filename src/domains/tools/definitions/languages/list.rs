//! List languages tool definition.
//!
//! Reports every language tag carried by at least one registered prompt.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::prompts::PromptRegistry;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the list languages tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListLanguagesParams {}

/// List languages tool - enumerates the language tags of all prompts.
pub struct ListLanguagesTool;

impl ListLanguagesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_languages";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List the languages that have language-specific prompts available.";

    /// Sorted language tags of the registry.
    pub fn languages(registry: &PromptRegistry) -> Vec<String> {
        let mut languages: Vec<_> = registry.supported_languages().into_iter().collect();
        languages.sort();
        languages
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(_params: &ListLanguagesParams, registry: &PromptRegistry) -> CallToolResult {
        let languages = Self::languages(registry);
        info!("Listing {} language(s)", languages.len());

        let body = serde_json::json!({ "languages": languages });
        match serde_json::to_string_pretty(&body) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => CallToolResult::error(vec![Content::text(format!(
                "Failed to serialize languages: {}",
                e
            ))]),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        registry: Arc<PromptRegistry>,
    ) -> Result<serde_json::Value, String> {
        let params: ListLanguagesParams = match arguments {
            serde_json::Value::Null => ListLanguagesParams::default(),
            other => serde_json::from_value(other)
                .map_err(|e| ToolError::invalid_arguments(e.to_string()).to_string())?,
        };

        let result = Self::execute(&params, &registry);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListLanguagesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(registry: Arc<PromptRegistry>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let registry = registry.clone();
            async move {
                let params: ListLanguagesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &registry))
            }
            .boxed()
        })
    }
}
