//! Built-in prompt definitions.
//!
//! Each built-in prompt is defined in its own file with:
//! - Metadata (name, description, optional language)
//! - Content bundled at build time
//!
//! ## Adding a New Built-in Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`) and its markdown body
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod golang_context;

use std::marker::PhantomData;

use super::model::Prompt;
use super::provider::PromptProvider;

pub use golang_context::GolangContextPrompt;

/// Trait for built-in prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// Optional language tag.
    const LANGUAGE: Option<&'static str> = None;

    /// The prompt body.
    fn content() -> &'static str;
}

/// Provider serving one built-in prompt definition.
pub struct BuiltinProvider<D> {
    _definition: PhantomData<fn() -> D>,
}

impl<D: PromptDefinition> BuiltinProvider<D> {
    pub fn new() -> Self {
        Self {
            _definition: PhantomData,
        }
    }
}

impl<D: PromptDefinition> Default for BuiltinProvider<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: PromptDefinition> PromptProvider for BuiltinProvider<D> {
    fn prompts(&self) -> Vec<Prompt> {
        vec![
            Prompt::new(D::NAME, D::DESCRIPTION, D::content())
                .with_language(D::LANGUAGE.unwrap_or_default()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged;

    impl PromptDefinition for Tagged {
        const NAME: &'static str = "tagged";
        const DESCRIPTION: &'static str = "A tagged prompt";
        const LANGUAGE: Option<&'static str> = Some("rust");

        fn content() -> &'static str {
            "body"
        }
    }

    #[test]
    fn test_builtin_provider_carries_language() {
        let prompts = BuiltinProvider::<Tagged>::new().prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "tagged");
        assert_eq!(prompts[0].language(), Some("rust"));
    }
}
