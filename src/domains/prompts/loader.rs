//! Directory-based prompt loading.
//!
//! Turns a directory of markdown files into prompt providers. A missing
//! directory is not an error. A directory that exists but cannot be listed
//! is, and [`DirectoryLoader::load_many`] logs and skips it. Individual
//! files that cannot be used are skipped with a warning.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use super::error::PromptError;
use super::metadata;
use super::provider::{FilePromptProvider, PromptProvider};

/// File extension of prompt and rule files, compared case-insensitively.
const MARKDOWN_EXTENSION: &str = ".md";

/// A loader that turns one directory into prompt providers.
pub trait DirectoryLoader {
    /// Short label used in log messages (e.g. "prompts", "rules").
    fn kind(&self) -> &'static str;

    /// Load every eligible file of `dir`.
    fn load(&self, dir: &Path) -> Result<Vec<Box<dyn PromptProvider>>, PromptError>;

    /// Load several directories in order. Never fails as a whole: a directory
    /// that cannot be listed is logged and contributes nothing.
    fn load_many(&self, dirs: &[PathBuf]) -> Vec<Box<dyn PromptProvider>> {
        let mut providers = Vec::new();

        for dir in dirs {
            match self.load(dir) {
                Ok(loaded) => {
                    debug!(
                        "Loaded {} {} provider(s) from {}",
                        loaded.len(),
                        self.kind(),
                        dir.display()
                    );
                    providers.extend(loaded);
                }
                Err(e) => {
                    warn!(
                        "Failed to load {} from directory, skipping: {}",
                        self.kind(),
                        e
                    );
                }
            }
        }

        providers
    }
}

/// A markdown file found directly inside a scanned directory.
#[derive(Debug, Clone)]
pub(crate) struct MarkdownFile {
    pub file_name: String,
    pub path: PathBuf,
}

impl MarkdownFile {
    /// The file name with a trailing `.md` removed.
    pub fn stem(&self) -> &str {
        self.file_name
            .strip_suffix(MARKDOWN_EXTENSION)
            .unwrap_or(&self.file_name)
    }

    /// Read the file as text. Failures are logged and yield `None`.
    pub fn read(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!("Failed to read file {}, skipping: {}", self.file_name, e);
                None
            }
        }
    }
}

/// List the markdown files directly inside `dir`, sorted by file name.
///
/// Returns an empty list when `dir` does not exist.
pub(crate) fn scan_markdown_files(dir: &Path) -> Result<Vec<MarkdownFile>, PromptError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Directory does not exist: {}", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(PromptError::directory_read(dir, e)),
    };

    let mut files = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| PromptError::directory_read(dir, e))?;

        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                warn!("Failed to get file type for {:?}: {}", entry.file_name(), e);
                continue;
            }
        };
        if file_type.is_dir() {
            continue;
        }

        let Ok(file_name) = entry.file_name().into_string() else {
            warn!("Skipping file with non UTF-8 name: {:?}", entry.file_name());
            continue;
        };

        if !file_name.to_lowercase().ends_with(MARKDOWN_EXTENSION) {
            continue;
        }

        files.push(MarkdownFile {
            path: entry.path(),
            file_name,
        });
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(files)
}

/// Loader for prompt directories: markdown files with optional inline metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptDirectoryLoader;

impl PromptDirectoryLoader {
    pub fn new() -> Self {
        Self
    }

    /// Build the provider for one file, or `None` when the file must be skipped.
    fn load_file(&self, file: &MarkdownFile) -> Option<FilePromptProvider> {
        let content = file.read()?;

        if content.is_empty() {
            warn!("Empty prompt file, skipping: {}", file.file_name);
            return None;
        }

        let parsed = metadata::parse(&content);
        let name = file.stem();

        let description = parsed
            .title()
            .map(str::to_string)
            .or_else(|| metadata::description_from_content(parsed.content))
            .unwrap_or_else(|| format!("Custom prompt: {}", name));

        if parsed.content.is_empty() {
            warn!(
                "Prompt file has no content after parsing metadata, skipping: {}",
                file.file_name
            );
            return None;
        }

        if name.is_empty() {
            warn!("Invalid prompt filename, skipping: {}", file.file_name);
            return None;
        }

        Some(FilePromptProvider::new(
            name,
            parsed.content,
            description,
            parsed.language().unwrap_or_default(),
        ))
    }
}

impl DirectoryLoader for PromptDirectoryLoader {
    fn kind(&self) -> &'static str {
        "prompts"
    }

    #[instrument(skip_all, fields(dir = %dir.display()))]
    fn load(&self, dir: &Path) -> Result<Vec<Box<dyn PromptProvider>>, PromptError> {
        let files = scan_markdown_files(dir)?;

        let providers: Vec<Box<dyn PromptProvider>> = files
            .iter()
            .filter_map(|file| self.load_file(file))
            .map(|provider| Box::new(provider) as Box<dyn PromptProvider>)
            .collect();

        if !providers.is_empty() {
            info!("Loaded {} custom prompt(s) from {}", providers.len(), dir.display());
        }

        Ok(providers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::prompts::Prompt;
    use tempfile::TempDir;

    const PROMPT1: &str = "lang:golang\ntitle:Prompt 1 Title\n\n# Prompt 1\nThis is prompt 1 content.";
    const PROMPT2: &str = "# Prompt 2 Header\nThis is prompt 2 content.";

    fn collect(providers: &[Box<dyn PromptProvider>]) -> Vec<Prompt> {
        providers.iter().flat_map(|p| p.prompts()).collect()
    }

    fn fixture_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("prompt1.md"), PROMPT1).unwrap();
        fs::write(temp_dir.path().join("prompt2.md"), PROMPT2).unwrap();
        fs::write(temp_dir.path().join("not-a-prompt.txt"), "not a markdown file").unwrap();
        temp_dir
    }

    #[test]
    fn test_load_prompts_from_directory() {
        let temp_dir = fixture_dir();

        let providers = PromptDirectoryLoader::new().load(temp_dir.path()).unwrap();
        assert_eq!(providers.len(), 2);

        let prompts = collect(&providers);
        assert_eq!(prompts.len(), 2);

        let prompt1 = prompts.iter().find(|p| p.name == "prompt1").unwrap();
        assert_eq!(prompt1.description, "Prompt 1 Title");
        assert_eq!(prompt1.language(), Some("golang"));
        assert_eq!(prompt1.content, "# Prompt 1\nThis is prompt 1 content.");
        assert!(!prompt1.content.contains("lang:golang"));
        assert!(!prompt1.content.contains("title:"));

        let prompt2 = prompts.iter().find(|p| p.name == "prompt2").unwrap();
        assert_eq!(prompt2.description, "Prompt 2 Header");
        assert_eq!(prompt2.language(), None);
        assert_eq!(prompt2.content, PROMPT2);
    }

    #[test]
    fn test_load_is_sorted_by_file_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.md"), "B").unwrap();
        fs::write(temp_dir.path().join("a.md"), "A").unwrap();
        fs::write(temp_dir.path().join("c.md"), "C").unwrap();

        let providers = PromptDirectoryLoader::new().load(temp_dir.path()).unwrap();
        let names: Vec<_> = collect(&providers).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_load_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent");

        let providers = PromptDirectoryLoader::new().load(&missing).unwrap();
        assert!(providers.is_empty());
    }

    #[test]
    fn test_load_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let providers = PromptDirectoryLoader::new().load(temp_dir.path()).unwrap();
        assert!(providers.is_empty());
    }

    #[test]
    fn test_load_file_path_is_an_error() {
        // A path that exists but cannot be listed as a directory. Stands in
        // for permission failures, which root ignores.
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.md");
        fs::write(&file, "content").unwrap();

        let result = PromptDirectoryLoader::new().load(&file);
        assert!(matches!(result, Err(PromptError::DirectoryRead { .. })));
    }

    #[test]
    fn test_skips_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("nested.md")).unwrap();
        fs::write(temp_dir.path().join("nested.md").join("inner.md"), "inner").unwrap();
        fs::write(temp_dir.path().join("top.md"), "top").unwrap();

        let providers = PromptDirectoryLoader::new().load(temp_dir.path()).unwrap();
        let prompts = collect(&providers);
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "top");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("upper.MD"), "# Upper\nbody").unwrap();

        let providers = PromptDirectoryLoader::new().load(temp_dir.path()).unwrap();
        let prompts = collect(&providers);
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "upper.MD");
    }

    #[test]
    fn test_skips_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("empty.md"), "").unwrap();

        let providers = PromptDirectoryLoader::new().load(temp_dir.path()).unwrap();
        assert!(providers.is_empty());
    }

    #[test]
    fn test_skips_metadata_only_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("meta.md"), "lang:rust\ntitle:Nothing\n").unwrap();

        let providers = PromptDirectoryLoader::new().load(temp_dir.path()).unwrap();
        assert!(providers.is_empty());
    }

    #[test]
    fn test_skips_empty_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".md"), "content").unwrap();

        let providers = PromptDirectoryLoader::new().load(temp_dir.path()).unwrap();
        assert!(providers.is_empty());
    }

    #[test]
    fn test_skips_invalid_utf8_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("binary.md"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(temp_dir.path().join("good.md"), "good").unwrap();

        let providers = PromptDirectoryLoader::new().load(temp_dir.path()).unwrap();
        let prompts = collect(&providers);
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "good");
    }

    #[test]
    fn test_fallback_description() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("blank.md"), "\n\n   \n").unwrap();

        let providers = PromptDirectoryLoader::new().load(temp_dir.path()).unwrap();
        let prompts = collect(&providers);
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].description, "Custom prompt: blank");
    }

    #[test]
    fn test_empty_title_falls_back_to_heading() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("t.md"), "title:\n\n## Real Heading\nbody").unwrap();

        let providers = PromptDirectoryLoader::new().load(temp_dir.path()).unwrap();
        let prompts = collect(&providers);
        assert_eq!(prompts[0].description, "Real Heading");
    }

    #[test]
    fn test_load_many_continues_after_failure() {
        let first = fixture_dir();
        let second = TempDir::new().unwrap();
        fs::write(second.path().join("extra.md"), "extra").unwrap();

        let not_a_dir = second.path().join("extra.md");
        let missing = second.path().join("missing");

        let dirs = vec![
            first.path().to_path_buf(),
            not_a_dir,
            missing,
            second.path().to_path_buf(),
        ];

        let providers = PromptDirectoryLoader::new().load_many(&dirs);
        let names: Vec<_> = collect(&providers).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["prompt1", "prompt2", "extra"]);
    }

    #[test]
    fn test_load_many_empty() {
        let providers = PromptDirectoryLoader::new().load_many(&[]);
        assert!(providers.is_empty());
    }
}
