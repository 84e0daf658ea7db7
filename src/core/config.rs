//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default GitHub REST API base (tag listing).
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default raw content host (document fetch).
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream GitHub endpoints and HTTP client settings.
    pub github: GitHubConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Where documentation and tags are fetched from.
///
/// Requests are unauthenticated, so the tag API is subject to GitHub's
/// anonymous rate limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Base URL of the tag listing API, without trailing slash.
    pub api_base: String,

    /// Base URL of the raw content host, without trailing slash.
    pub raw_base: String,

    /// User agent sent with every request (the GitHub API requires one).
    pub user_agent: String,

    /// Overall request timeout in seconds; `None` keeps reqwest's default.
    pub timeout_secs: Option<u64>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            raw_base: DEFAULT_RAW_BASE.to_string(),
            user_agent: format!("terraform-doc-mcp/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: None,
        }
    }
}

impl GitHubConfig {
    /// Load GitHub settings from `TERRAFORM_DOC_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(api_base) = std::env::var("TERRAFORM_DOC_API_BASE") {
            config.api_base = normalize_base(&api_base);
            info!("Tag API base overridden: {}", config.api_base);
        }

        if let Ok(raw_base) = std::env::var("TERRAFORM_DOC_RAW_BASE") {
            config.raw_base = normalize_base(&raw_base);
            info!("Raw content base overridden: {}", config.raw_base);
        }

        if let Ok(user_agent) = std::env::var("TERRAFORM_DOC_USER_AGENT") {
            config.user_agent = user_agent;
        }

        if let Ok(timeout) = std::env::var("TERRAFORM_DOC_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.timeout_secs = Some(secs),
                Err(_) => warn!(
                    "Ignoring invalid TERRAFORM_DOC_TIMEOUT_SECS value: {}",
                    timeout
                ),
            }
        }

        config
    }
}

/// Trim whitespace and trailing slashes from a base URL.
fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "terraform-doc-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            github: GitHubConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...), upstream settings the
    /// `TERRAFORM_DOC_` prefix.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();
        config.github = GitHubConfig::from_env();

        config
    }

    /// Check that the upstream base URLs are usable.
    pub fn validate(&self) -> Result<()> {
        for (name, base) in [
            ("TERRAFORM_DOC_API_BASE", &self.github.api_base),
            ("TERRAFORM_DOC_RAW_BASE", &self.github.raw_base),
        ] {
            if !(base.starts_with("https://") || base.starts_with("http://")) {
                return Err(Error::config(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, base
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_github_endpoints() {
        let config = Config::default();
        assert_eq!(config.github.api_base, "https://api.github.com");
        assert_eq!(config.github.raw_base, "https://raw.githubusercontent.com");
        assert!(config.github.user_agent.starts_with("terraform-doc-mcp/"));
        assert_eq!(config.github.timeout_secs, None);
    }

    #[test]
    fn test_github_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TERRAFORM_DOC_API_BASE", "http://127.0.0.1:9000/");
            std::env::set_var("TERRAFORM_DOC_RAW_BASE", " http://127.0.0.1:9001// ");
            std::env::set_var("TERRAFORM_DOC_TIMEOUT_SECS", "30");
        }
        let config = GitHubConfig::from_env();
        assert_eq!(config.api_base, "http://127.0.0.1:9000");
        assert_eq!(config.raw_base, "http://127.0.0.1:9001");
        assert_eq!(config.timeout_secs, Some(30));
        unsafe {
            std::env::remove_var("TERRAFORM_DOC_API_BASE");
            std::env::remove_var("TERRAFORM_DOC_RAW_BASE");
            std::env::remove_var("TERRAFORM_DOC_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.github.raw_base = "ftp://mirror.local".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("TERRAFORM_DOC_RAW_BASE"));
    }

    #[test]
    fn test_invalid_timeout_ignored() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TERRAFORM_DOC_TIMEOUT_SECS", "soon");
        }
        let config = GitHubConfig::from_env();
        assert_eq!(config.timeout_secs, None);
        unsafe {
            std::env::remove_var("TERRAFORM_DOC_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "tf-docs");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "tf-docs");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }
}
