//! Prompts-by-language tool definition.

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

/// Parameters for the prompts-by-language tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PromptsByLanguageParams {
    /// Language tag to look up (exact, case-sensitive), e.g. "golang".
    pub language: String,
}

/// Prompts-by-language tool - returns every prompt tagged with a language.
pub struct PromptsByLanguageTool;

impl PromptsByLanguageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_prompts_by_language";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get all prompts tagged with the given language. \
        Returns name, description, language and content for each prompt; an empty list when none match.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(language = %params.language))]
    pub fn execute(params: &PromptsByLanguageParams, registry: &PromptRegistry) -> CallToolResult {
        let prompts = registry.prompts_by_language(&params.language);
        info!(
            "Found {} prompt(s) for language '{}'",
            prompts.len(),
            params.language
        );

        let body = serde_json::json!({
            "language": params.language,
            "prompts": prompts,
        });

        match serde_json::to_string_pretty(&body) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => CallToolResult::error(vec![Content::text(format!(
                "Failed to serialize prompts: {}",
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
        let language = arguments
            .get("language")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ToolError::invalid_arguments("Missing or invalid 'language' parameter").to_string()
            })?
            .to_string();

        let result = Self::execute(&PromptsByLanguageParams { language }, &registry);

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
            input_schema: cached_schema_for_type::<PromptsByLanguageParams>(),
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
                let params: PromptsByLanguageParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &registry))
            }
            .boxed()
        })
    }
}
