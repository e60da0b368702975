//! Configuration module for the echo function server.
//!
//! Supports both command-line arguments and TOML configuration file.
//! CLI arguments (and their environment variables) take precedence over
//! config file values.

use clap::Parser;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::functions::echo::FUNCTION_NAME;

/// Command-line arguments for the function server
#[derive(Parser, Debug)]
#[command(name = "echo-function")]
#[command(author = "echo-function authors")]
#[command(version = "0.1.0")]
#[command(about = "Serves the echoRequest function over HTTP", long_about = None)]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind to (e.g., 0.0.0.0:8080)
    #[arg(short = 'l', long)]
    pub listen: Option<String>,

    /// Port to bind to, overriding the port of the listen address
    #[arg(short = 'p', long, env = "PORT")]
    pub port: Option<u16>,

    /// Name the function is registered under; also served at `/<target>`
    #[arg(long, env = "FUNCTION_TARGET")]
    pub target: Option<String>,

    /// Maximum accepted request body size in bytes
    #[arg(long)]
    pub max_body_size: Option<usize>,

    /// Log level (trace, debug, info, warn, error) [default: info]
    #[arg(long)]
    pub log_level: Option<String>,
}

/// TOML configuration file structure
#[derive(Debug, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server-related configuration
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Registered function name
    #[serde(default = "default_target")]
    pub target: String,
    /// Maximum request body size in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            target: default_target(),
            max_body_size: default_max_body_size(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_target() -> String {
    FUNCTION_NAME.to_string()
}

fn default_max_body_size() -> usize {
    32 * 1024 * 1024 // 32 MB
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Final resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub listen: SocketAddr,
    pub target: String,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    /// Load configuration from CLI args, environment and optional TOML file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_cli(CliArgs::parse())
    }

    /// Resolve configuration from already parsed CLI args.
    /// CLI arguments take precedence over TOML file values.
    pub fn from_cli(cli: CliArgs) -> Result<Self, ConfigError> {
        // Load TOML config if specified
        let toml_config = if let Some(ref config_path) = cli.config {
            let contents = std::fs::read_to_string(config_path)
                .map_err(|e| ConfigError::FileRead(config_path.clone(), e))?;
            toml::from_str(&contents)
                .map_err(|e| ConfigError::TomlParse(config_path.clone(), e))?
        } else {
            TomlConfig::default()
        };

        Self::merge(cli, toml_config)
    }

    fn merge(cli: CliArgs, toml_config: TomlConfig) -> Result<Self, ConfigError> {
        let listen = cli.listen.unwrap_or(toml_config.server.listen);
        let mut addr: SocketAddr = listen
            .parse()
            .map_err(|e| ConfigError::InvalidListen(listen.clone(), e))?;
        if let Some(port) = cli.port {
            addr.set_port(port);
        }

        let target = cli.target.unwrap_or(toml_config.server.target);
        if !is_valid_target(&target) {
            return Err(ConfigError::InvalidTarget(target));
        }

        Ok(Config {
            listen: addr,
            target,
            max_body_size: cli
                .max_body_size
                .unwrap_or(toml_config.server.max_body_size),
            log_level: cli.log_level.unwrap_or(toml_config.logging.level),
        })
    }
}

/// Targets become a literal route path, so only plain path characters are
/// allowed. Route syntax such as `{name}`, `:name` or `*rest` is rejected.
fn is_valid_target(target: &str) -> bool {
    target
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/'))
}

impl Default for Config {
    fn default() -> Self {
        let server = ServerConfig::default();
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8080)),
            target: server.target,
            max_body_size: server.max_body_size,
            log_level: default_log_level(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {}", .0.display(), .1)]
    FileRead(PathBuf, #[source] std::io::Error),
    #[error("Failed to parse config file '{}': {}", .0.display(), .1)]
    TomlParse(PathBuf, #[source] toml::de::Error),
    #[error("Invalid listen address '{0}': {1}")]
    InvalidListen(String, #[source] std::net::AddrParseError),
    #[error("Invalid function target '{0}': only letters, digits, '_', '-', '.' and '/' are allowed")]
    InvalidTarget(String),
}
