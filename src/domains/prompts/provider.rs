//! Prompt providers.
//!
//! A provider is any source of prompts. All data is fixed at construction
//! time; `prompts()` never touches the filesystem.

use super::model::Prompt;

/// A source capable of producing one or more prompts.
pub trait PromptProvider: Send + Sync {
    /// The prompts this provider contributes, in a stable order.
    fn prompts(&self) -> Vec<Prompt>;
}

/// Provider backed by a single prompt file loaded from a prompts directory.
#[derive(Debug, Clone)]
pub struct FilePromptProvider {
    prompt: Prompt,
}

impl FilePromptProvider {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        description: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            prompt: Prompt::new(name, description, content).with_language(language),
        }
    }
}

impl PromptProvider for FilePromptProvider {
    fn prompts(&self) -> Vec<Prompt> {
        vec![self.prompt.clone()]
    }
}
