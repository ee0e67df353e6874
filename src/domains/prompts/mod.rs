//! Prompts domain module.
//!
//! Prompts are named blocks of instructional text served to MCP clients.
//! One prompt is built in; the rest are discovered at startup from prompt
//! and rule directories.
//!
//! ## Architecture
//!
//! - `model.rs` - The `Prompt` data model
//! - `provider.rs` - The `PromptProvider` capability and the file-backed provider
//! - `definitions/` - Built-in prompt definitions (one file per prompt)
//! - `metadata.rs` - Inline `key:value` metadata parsing
//! - `loader.rs` - Prompt directory loading
//! - `rules.rs` - Rule directory loading
//! - `registry.rs` - Provider aggregation and lookup
//! - `service.rs` - Startup population and MCP-facing operations
//!
//! ## Prompt File Format
//!
//! ```text
//! lang:golang
//! title:Error handling conventions
//!
//! # Error handling
//! Wrap errors with context...
//! ```
//!
//! The metadata block is optional. Without `title`, the first heading (or
//! first line) becomes the description.

pub mod definitions;
mod error;
pub mod loader;
pub mod metadata;
mod model;
mod provider;
mod registry;
pub mod rules;
mod service;

pub use definitions::{BuiltinProvider, PromptDefinition};
pub use error::PromptError;
pub use loader::{DirectoryLoader, PromptDirectoryLoader};
pub use model::{Prompt, PromptArgument};
pub use provider::{FilePromptProvider, PromptProvider};
pub use registry::{PromptRegistry, builtin_providers};
pub use rules::{RuleDirectoryLoader, RuleProvider};
pub use service::PromptService;
