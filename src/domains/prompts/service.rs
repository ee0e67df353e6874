//! Prompt service implementation.
//!
//! The PromptService populates the prompt registry once at startup and serves
//! it read-only afterwards. Population order: built-in prompts, then every
//! prompt directory, then every rule directory.

use rmcp::model::{GetPromptResult, Prompt as McpPrompt, PromptMessage, PromptMessageRole};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::error::PromptError;
use super::loader::{DirectoryLoader, PromptDirectoryLoader};
use super::registry::PromptRegistry;
use super::rules::RuleDirectoryLoader;
use crate::core::config::PromptsConfig;

/// Service for listing and fetching prompts.
#[derive(Debug, Clone)]
pub struct PromptService {
    registry: Arc<PromptRegistry>,
}

impl PromptService {
    /// Build the registry from the configured directories.
    #[instrument(skip_all)]
    pub fn new(config: &PromptsConfig) -> Self {
        info!("Initializing PromptService");

        let mut registry = PromptRegistry::with_builtins();
        let builtin_count = registry.provider_count();

        let custom = PromptDirectoryLoader::new().load_many(&config.prompt_dirs);
        let custom_count = custom.len();
        for provider in custom {
            registry.register(provider);
        }

        let rules = RuleDirectoryLoader::new().load_many(&config.rule_dirs);
        let rule_count = rules.len();
        for provider in rules {
            registry.register(provider);
        }

        info!(
            "Registered {} built-in, {} custom prompt and {} rule provider(s)",
            builtin_count, custom_count, rule_count
        );

        Self::from_registry(registry)
    }

    /// Wrap an already populated registry.
    pub fn from_registry(registry: PromptRegistry) -> Self {
        for name in registry.duplicate_names() {
            warn!(
                "Duplicate prompt name '{}': only the first registered prompt is served",
                name
            );
        }

        Self {
            registry: Arc::new(registry),
        }
    }

    /// The shared, read-only registry.
    pub fn registry(&self) -> &Arc<PromptRegistry> {
        &self.registry
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<McpPrompt> {
        self.registry
            .all_prompts()
            .iter()
            .map(|prompt| prompt.to_mcp())
            .collect()
    }

    /// Get a prompt's content as a single user message.
    pub async fn get_prompt(&self, name: &str) -> Result<GetPromptResult, PromptError> {
        let prompt = self
            .registry
            .get_prompt(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        Ok(GetPromptResult {
            description: Some(prompt.description),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                prompt.content,
            )],
        })
    }
}
