//! Domains module containing the server's business logic.
//!
//! - `prompts`: the prompt registry, directory loaders and built-in prompts
//! - `tools`: MCP tools exposing the registry's language index

pub mod prompts;
pub mod tools;
