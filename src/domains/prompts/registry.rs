//! Prompt Registry - aggregation of all prompt providers.
//!
//! The registry keeps providers in registration order and answers every query
//! by flattening them. It is populated once at startup and read-only
//! afterwards, so it can be shared behind an `Arc` without locking.
//!
//! When adding a new built-in prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `builtin_providers()`

use std::collections::HashSet;

use super::definitions::{BuiltinProvider, GolangContextPrompt};
use super::model::Prompt;
use super::provider::PromptProvider;

/// Get all built-in providers, in registration order.
pub fn builtin_providers() -> Vec<Box<dyn PromptProvider>> {
    vec![Box::new(BuiltinProvider::<GolangContextPrompt>::new())]
}

/// Ordered collection of prompt providers.
#[derive(Default)]
pub struct PromptRegistry {
    providers: Vec<Box<dyn PromptProvider>>,
}

impl PromptRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in providers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for provider in builtin_providers() {
            registry.register(provider);
        }
        registry
    }

    /// Append a provider.
    pub fn register(&mut self, provider: Box<dyn PromptProvider>) {
        self.providers.push(provider);
    }

    /// Number of registered providers.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Every prompt of every provider, in registration order.
    pub fn all_prompts(&self) -> Vec<Prompt> {
        self.providers.iter().flat_map(|p| p.prompts()).collect()
    }

    /// The first prompt whose name matches exactly.
    pub fn get_prompt(&self, name: &str) -> Option<Prompt> {
        self.all_prompts().into_iter().find(|p| p.name == name)
    }

    /// Distinct non-empty language tags across all prompts.
    pub fn supported_languages(&self) -> HashSet<String> {
        self.all_prompts()
            .into_iter()
            .filter_map(|p| p.language)
            .filter(|lang| !lang.is_empty())
            .collect()
    }

    /// All prompts tagged with exactly `language`, in registration order.
    pub fn prompts_by_language(&self, language: &str) -> Vec<Prompt> {
        self.all_prompts()
            .into_iter()
            .filter(|p| p.language() == Some(language))
            .collect()
    }

    /// Names shared by more than one prompt, each reported once, in order of
    /// first occurrence. Lookups resolve such names to the first registered
    /// prompt.
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for prompt in self.all_prompts() {
            if !seen.insert(prompt.name.clone()) && reported.insert(prompt.name.clone()) {
                duplicates.push(prompt.name);
            }
        }

        duplicates
    }
}

impl std::fmt::Debug for PromptRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptRegistry")
            .field("providers", &self.providers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticProvider(Vec<Prompt>);

    impl PromptProvider for StaticProvider {
        fn prompts(&self) -> Vec<Prompt> {
            self.0.clone()
        }
    }

    fn prompt(name: &str, language: &str) -> Prompt {
        Prompt::new(name, format!("{} description", name), format!("{} content", name))
            .with_language(language)
    }

    fn provider(prompts: Vec<Prompt>) -> Box<dyn PromptProvider> {
        Box::new(StaticProvider(prompts))
    }

    fn sample_registry() -> PromptRegistry {
        let mut registry = PromptRegistry::new();
        registry.register(provider(vec![prompt("a", "golang"), prompt("b", "")]));
        registry.register(provider(vec![prompt("c", "rust")]));
        registry.register(provider(vec![prompt("d", "golang")]));
        registry
    }

    fn names(prompts: &[Prompt]) -> Vec<&str> {
        prompts.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_registry() {
        let registry = PromptRegistry::new();
        assert!(registry.all_prompts().is_empty());
        assert!(registry.get_prompt("anything").is_none());
        assert!(registry.supported_languages().is_empty());
        assert!(registry.prompts_by_language("golang").is_empty());
    }

    #[test]
    fn test_with_builtins() {
        let registry = PromptRegistry::with_builtins();
        let prompts = registry.all_prompts();
        assert_eq!(prompts.len(), 1);

        let prompt = registry.get_prompt("golang-context-rule").unwrap();
        assert_eq!(prompt.name, "golang-context-rule");
        assert!(registry.get_prompt("nonexistent").is_none());
    }

    #[test]
    fn test_all_prompts_preserves_registration_order() {
        let registry = sample_registry();
        let prompts = registry.all_prompts();
        assert_eq!(names(&prompts), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_all_prompts_length_is_sum_of_providers() {
        let mut registry = PromptRegistry::new();
        for provider in builtin_providers() {
            registry.register(provider);
        }
        for provider in builtin_providers() {
            registry.register(provider);
        }
        assert_eq!(registry.provider_count(), 2);
        assert_eq!(registry.all_prompts().len(), 2);
    }

    #[test]
    fn test_all_prompts_is_idempotent() {
        let registry = sample_registry();
        assert_eq!(registry.all_prompts(), registry.all_prompts());
    }

    #[test]
    fn test_get_prompt_exact_match() {
        let registry = sample_registry();
        assert_eq!(registry.get_prompt("c").unwrap().language(), Some("rust"));
        assert!(registry.get_prompt("C").is_none());
        assert!(registry.get_prompt("").is_none());
    }

    #[test]
    fn test_get_prompt_first_registered_wins() {
        let mut registry = PromptRegistry::new();
        registry.register(provider(vec![prompt("dup", "golang")]));
        registry.register(provider(vec![prompt("dup", "rust")]));

        assert_eq!(registry.all_prompts().len(), 2);
        assert_eq!(registry.get_prompt("dup").unwrap().language(), Some("golang"));
    }

    #[test]
    fn test_supported_languages() {
        let registry = sample_registry();
        let languages = registry.supported_languages();

        assert_eq!(languages.len(), 2);
        assert!(languages.contains("golang"));
        assert!(languages.contains("rust"));
        assert!(!languages.contains(""));
    }

    #[test]
    fn test_prompts_by_language() {
        let registry = sample_registry();

        assert_eq!(names(&registry.prompts_by_language("golang")), vec!["a", "d"]);
        assert_eq!(names(&registry.prompts_by_language("rust")), vec!["c"]);
        assert!(registry.prompts_by_language("Rust").is_empty());
        assert!(registry.prompts_by_language("python").is_empty());
        assert!(registry.prompts_by_language("").is_empty());
    }

    #[test]
    fn test_duplicate_names() {
        let mut registry = sample_registry();
        assert!(registry.duplicate_names().is_empty());

        registry.register(provider(vec![prompt("c", ""), prompt("a", "")]));
        registry.register(provider(vec![prompt("a", "")]));

        assert_eq!(registry.duplicate_names(), vec!["c", "a"]);
    }
}
