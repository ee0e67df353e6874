//! Go module cache context prompt definition.

use super::PromptDefinition;

/// Guidance for exploring third-party Go packages through the module cache.
pub struct GolangContextPrompt;

impl PromptDefinition for GolangContextPrompt {
    const NAME: &'static str = "golang-context-rule";
    const DESCRIPTION: &'static str = "Provides a systematic approach for working with third-party Go packages by referencing the Go module cache";

    fn content() -> &'static str {
        include_str!("golang_context.md")
    }
}
