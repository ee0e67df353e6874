//! Core infrastructure shared by every domain.
//!
//! Configuration loading, logging setup, the unified error type, the MCP
//! server handler and the transports it runs on.

pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
