//! End-to-end prompt loading through the public API.

use std::fs;

use mcp_local_context::core::Config;
use mcp_local_context::core::config::PromptsConfig;
use mcp_local_context::domains::prompts::{PromptError, PromptService};
use tempfile::TempDir;

fn service_for(prompt_dirs: &[&TempDir], rule_dirs: &[&TempDir]) -> PromptService {
    PromptService::new(&PromptsConfig {
        prompt_dirs: prompt_dirs.iter().map(|d| d.path().to_path_buf()).collect(),
        rule_dirs: rule_dirs.iter().map(|d| d.path().to_path_buf()).collect(),
    })
}

#[test]
fn loads_builtins_then_directories() {
    let prompts = TempDir::new().unwrap();
    fs::write(
        prompts.path().join("prompt1.md"),
        "title: Test Prompt 1\nlang: golang\n\nThis is test prompt 1 content.",
    )
    .unwrap();
    fs::write(
        prompts.path().join("prompt2.md"),
        "# Test Prompt 2\n\nThis is test prompt 2 content.",
    )
    .unwrap();
    fs::write(prompts.path().join("notes.txt"), "ignored").unwrap();

    let service = service_for(&[&prompts], &[]);
    let registry = service.registry();

    let names: Vec<_> = registry.all_prompts().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["golang-context-rule", "prompt1", "prompt2"]);

    let prompt1 = registry.get_prompt("prompt1").unwrap();
    assert_eq!(prompt1.description, "Test Prompt 1");
    assert_eq!(prompt1.language.as_deref(), Some("golang"));
    assert_eq!(prompt1.content, "This is test prompt 1 content.");

    let prompt2 = registry.get_prompt("prompt2").unwrap();
    assert_eq!(prompt2.description, "Test Prompt 2");
    assert_eq!(prompt2.language, None);
    assert_eq!(prompt2.content, "# Test Prompt 2\n\nThis is test prompt 2 content.");
}

#[test]
fn language_index_spans_directories() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    fs::write(first.path().join("a.md"), "lang:rust\n\nA").unwrap();
    fs::write(second.path().join("b.md"), "lang:rust\n\nB").unwrap();
    fs::write(second.path().join("c.md"), "lang:python\n\nC").unwrap();

    let service = service_for(&[&first, &second], &[]);
    let registry = service.registry();

    let rust: Vec<_> = registry
        .prompts_by_language("rust")
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(rust, vec!["a", "b"]);
    assert!(registry.prompts_by_language("java").is_empty());
    assert_eq!(registry.supported_languages().len(), 2);
}

#[test]
fn missing_directories_are_skipped() {
    let prompts = TempDir::new().unwrap();
    let missing = prompts.path().join("does-not-exist");

    let service = PromptService::new(&PromptsConfig {
        prompt_dirs: vec![missing.clone()],
        rule_dirs: vec![missing],
    });

    assert_eq!(service.registry().all_prompts().len(), 1);
}

#[test]
fn rules_load_after_prompts_with_raw_content() {
    let prompts = TempDir::new().unwrap();
    let rules = TempDir::new().unwrap();
    fs::write(prompts.path().join("style.md"), "title:Style\n\nUse rustfmt.").unwrap();
    fs::write(rules.path().join("commits.md"), "title:ignored\n\nSign commits.").unwrap();

    let service = service_for(&[&prompts], &[&rules]);
    let registry = service.registry();

    let names: Vec<_> = registry.all_prompts().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["golang-context-rule", "style", "commits"]);

    let rule = registry.get_prompt("commits").unwrap();
    assert_eq!(
        rule.description,
        "Custom rule loaded from rules directory: commits"
    );
    assert_eq!(rule.content, "title:ignored\n\nSign commits.");
}

#[test]
fn first_registration_wins_on_name_clash() {
    let prompts = TempDir::new().unwrap();
    fs::write(
        prompts.path().join("golang-context-rule.md"),
        "title:Shadow\n\nshadowed",
    )
    .unwrap();

    let service = service_for(&[&prompts], &[]);
    let registry = service.registry();

    let prompt = registry.get_prompt("golang-context-rule").unwrap();
    assert_ne!(prompt.description, "Shadow");
    assert_eq!(registry.duplicate_names(), vec!["golang-context-rule"]);
}

#[test]
fn get_prompt_reports_unknown_names() {
    let service = service_for(&[], &[]);

    let result = tokio_test::block_on(service.get_prompt("nope"));
    assert!(matches!(result, Err(PromptError::NotFound(name)) if name == "nope"));
}

#[test]
fn config_file_drives_directories() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".mcp-local-context");
    fs::create_dir_all(config_dir.join("prompts")).unwrap();
    fs::create_dir_all(home.path().join("team-rules")).unwrap();
    fs::write(
        config_dir.join("config.json"),
        r#"{"custom_rule_dirs": ["~/team-rules"]}"#,
    )
    .unwrap();
    fs::write(config_dir.join("prompts").join("local.md"), "Local prompt").unwrap();
    fs::write(home.path().join("team-rules").join("review.md"), "Review").unwrap();

    let config = Config::load_from_home(home.path()).unwrap();
    let service = PromptService::new(&config.prompts);

    let names: Vec<_> = service
        .registry()
        .all_prompts()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["golang-context-rule", "local", "review"]);
}
