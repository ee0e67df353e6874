//! Configuration management for the MCP server.
//!
//! Configuration is layered:
//! 1. Built-in defaults
//! 2. `~/.mcp-local-context/config.json` (optional)
//! 3. `MCP_*` environment variables (and a `.env` file)
//!
//! The default prompts directory `~/.mcp-local-context/prompts` is always
//! appended to the configured prompt directories.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration directory under the user's home.
pub const CONFIG_DIR_NAME: &str = ".mcp-local-context";

/// Name of the configuration file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Name of the default prompts directory inside [`CONFIG_DIR_NAME`].
pub const PROMPTS_DIR_NAME: &str = "prompts";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The user's home directory could not be determined.
    #[error("Failed to determine home directory")]
    HomeDirNotFound,

    /// The configuration file exists but could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON.
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    /// Directories scanned for prompt files, in load order.
    pub prompt_dirs: Vec<PathBuf>,

    /// Directories scanned for rule files, loaded after prompt directories.
    pub rule_dirs: Vec<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Log file. When unset, logs go to stderr.
    pub file: Option<PathBuf>,
}

/// On-disk shape of `config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
    pub custom_prompt_dirs: Vec<String>,
    pub custom_rule_dirs: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mcp-local-context".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            prompts: PromptsConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the full configuration: config file under the home directory,
    /// then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Self::load_from_home(&home)
    }

    /// Same as [`Config::load`] with an explicit home directory.
    pub fn load_from_home(home: &Path) -> Result<Self, ConfigError> {
        let config_dir = home.join(CONFIG_DIR_NAME);
        let file = FileConfig::read(&config_dir.join(CONFIG_FILE_NAME))?;

        let mut config = Self::default();
        config.apply_file(file, home);
        config.apply_env(Some(home));
        config.prompts.prompt_dirs.push(config_dir.join(PROMPTS_DIR_NAME));

        Ok(config)
    }

    /// Configuration from defaults and environment variables only.
    ///
    /// Used as a fallback when the config file cannot be loaded. The default
    /// prompts directory is still added when the home directory is known.
    pub fn from_env() -> Self {
        let home = dirs::home_dir();

        let mut config = Self::default();
        config.apply_env(home.as_deref());
        if let Some(home) = home {
            config
                .prompts
                .prompt_dirs
                .push(home.join(CONFIG_DIR_NAME).join(PROMPTS_DIR_NAME));
        }

        config
    }

    fn apply_file(&mut self, file: FileConfig, home: &Path) {
        if let Some(level) = file.log_level.filter(|l| !l.is_empty()) {
            self.logging.level = level;
        }

        if let Some(log_file) = file.log_file.filter(|f| !f.is_empty()) {
            self.logging.file = Some(expand_path(&log_file, Some(home)));
        }

        self.prompts.prompt_dirs = file
            .custom_prompt_dirs
            .iter()
            .map(|dir| expand_path(dir, Some(home)))
            .collect();

        self.prompts.rule_dirs = file
            .custom_rule_dirs
            .iter()
            .map(|dir| expand_path(dir, Some(home)))
            .collect();
    }

    /// Apply `MCP_*` environment overrides.
    fn apply_env(&mut self, home: Option<&Path>) {
        dotenvy::dotenv().ok();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            self.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(file) = std::env::var("MCP_LOG_FILE") {
            self.logging.file = (!file.is_empty()).then(|| expand_path(&file, home));
        }

        if let Some(dirs) = std::env::var_os("MCP_PROMPT_DIRS") {
            self.prompts.prompt_dirs = split_dirs(&dirs, home);
        }

        if let Some(dirs) = std::env::var_os("MCP_RULE_DIRS") {
            self.prompts.rule_dirs = split_dirs(&dirs, home);
        }

        self.transport = TransportConfig::from_env();
    }
}

impl FileConfig {
    /// Read a config file. A missing file yields the defaults.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Expand a leading `~/` against `home`. Other paths are returned unchanged.
pub fn expand_path(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

fn split_dirs(value: &std::ffi::OsStr, home: Option<&Path>) -> Vec<PathBuf> {
    std::env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| match p.to_str() {
            Some(s) => expand_path(s, home),
            None => p,
        })
        .collect()
}
