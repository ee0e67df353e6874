//! Rule directories.
//!
//! Rules are markdown files served verbatim: no metadata block, no language
//! tag, and a generated description.

use std::path::Path;

use tracing::{info, instrument, warn};

use super::error::PromptError;
use super::loader::{DirectoryLoader, MarkdownFile, scan_markdown_files};
use super::model::Prompt;
use super::provider::PromptProvider;

/// Provider for a single rule file.
#[derive(Debug, Clone)]
pub struct RuleProvider {
    name: String,
    content: String,
}

impl RuleProvider {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl PromptProvider for RuleProvider {
    fn prompts(&self) -> Vec<Prompt> {
        vec![Prompt::new(
            self.name.clone(),
            format!("Custom rule loaded from rules directory: {}", self.name),
            self.content.clone(),
        )]
    }
}

/// Loader for rule directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleDirectoryLoader;

impl RuleDirectoryLoader {
    pub fn new() -> Self {
        Self
    }

    fn load_file(&self, file: &MarkdownFile) -> Option<RuleProvider> {
        let content = file.read()?;

        if content.is_empty() {
            warn!("Empty rule file, skipping: {}", file.file_name);
            return None;
        }

        let name = file.stem();
        if name.is_empty() {
            warn!("Invalid rule filename, skipping: {}", file.file_name);
            return None;
        }

        Some(RuleProvider::new(name, content))
    }
}

impl DirectoryLoader for RuleDirectoryLoader {
    fn kind(&self) -> &'static str {
        "rules"
    }

    #[instrument(skip_all, fields(dir = %dir.display()))]
    fn load(&self, dir: &Path) -> Result<Vec<Box<dyn PromptProvider>>, PromptError> {
        let providers: Vec<Box<dyn PromptProvider>> = scan_markdown_files(dir)?
            .iter()
            .filter_map(|file| self.load_file(file))
            .map(|provider| Box::new(provider) as Box<dyn PromptProvider>)
            .collect();

        if !providers.is_empty() {
            info!("Loaded {} rule(s) from {}", providers.len(), dir.display());
        }

        Ok(providers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_rules_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        let rule1 = "# Rule 1\n\nThis is rule 1 content.";
        let rule2 = "lang:rust\n\nMetadata is not parsed for rules.";
        fs::write(temp_dir.path().join("rule1.md"), rule1).unwrap();
        fs::write(temp_dir.path().join("rule2.md"), rule2).unwrap();
        fs::write(temp_dir.path().join("not-a-rule.txt"), "ignored").unwrap();

        let providers = RuleDirectoryLoader::new().load(temp_dir.path()).unwrap();
        assert_eq!(providers.len(), 2);

        let prompts: Vec<_> = providers.iter().flat_map(|p| p.prompts()).collect();
        assert_eq!(prompts[0].name, "rule1");
        assert_eq!(prompts[0].content, rule1);
        assert_eq!(
            prompts[0].description,
            "Custom rule loaded from rules directory: rule1"
        );
        assert_eq!(prompts[1].name, "rule2");
        assert_eq!(prompts[1].content, rule2);
        assert_eq!(prompts[1].language(), None);
    }

    #[test]
    fn test_load_rules_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let providers = RuleDirectoryLoader::new()
            .load(&temp_dir.path().join("nonexistent"))
            .unwrap();
        assert!(providers.is_empty());
    }

    #[test]
    fn test_skips_empty_rule() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("empty.md"), "").unwrap();

        let providers = RuleDirectoryLoader::new().load(temp_dir.path()).unwrap();
        assert!(providers.is_empty());
    }
}
