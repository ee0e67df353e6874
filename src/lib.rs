//! Local MCP prompt server.
//!
//! Serves reusable prompts to MCP clients. Prompts come from a built-in set
//! compiled into the binary and from markdown files in user-configured
//! directories. A file may start with a `key:value` metadata block; the
//! `title` key supplies the description and `lang` tags the prompt with a
//! language that clients can query through the `list_languages` and
//! `get_prompts_by_language` tools.
//!
//! # Architecture
//!
//! - **core**: configuration, logging, errors, the MCP server handler and transports
//! - **domains**:
//!   - **prompts**: prompt model, providers, directory loaders and the registry
//!   - **tools**: MCP tools over the registry's language index
//!
//! # Example
//!
//! ```rust,no_run
//! use mcp_local_context::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let server = McpServer::new(config);
//!     let prompts = server.list_prompts().await;
//!     println!("{} prompts loaded", prompts.len());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
