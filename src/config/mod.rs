//! Configuration management
//!
//! Configuration loads from environment variables or a TOML file. Provider
//! API keys come from the conventional `NEWS_API_KEY` / `GNEWS_API_KEY`
//! variables; everything else is prefixed `NEWSPULSE_`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// News provider configuration
    pub providers: ProviderConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the API server binds to
    pub bind_address: SocketAddr,

    /// Allow cross-origin requests
    pub enable_cors: bool,

    /// Trace incoming requests
    pub enable_request_logging: bool,
}

/// News provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// NewsAPI key (primary provider)
    pub news_api_key: String,

    /// NewsAPI base URL, overridable for testing
    pub news_api_url: String,

    /// GNews key (fallback provider)
    pub gnews_api_key: String,

    /// GNews base URL, overridable for testing
    pub gnews_api_url: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database path
    pub sqlite_path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let bind_address = std::env::var("NEWSPULSE_BIND_ADDRESS")
            .unwrap_or_else(|_| String::from("127.0.0.1:3000"))
            .parse::<SocketAddr>()
            .context("NEWSPULSE_BIND_ADDRESS is not a valid socket address")?;

        let news_api_key = std::env::var("NEWS_API_KEY").unwrap_or_default();
        let gnews_api_key = std::env::var("GNEWS_API_KEY").unwrap_or_default();

        let news_api_url = std::env::var("NEWSPULSE_NEWS_API_URL")
            .unwrap_or_else(|_| String::from("https://newsapi.org/v2"));
        let gnews_api_url = std::env::var("NEWSPULSE_GNEWS_API_URL")
            .unwrap_or_else(|_| String::from("https://gnews.io/api/v4"));

        let request_timeout_secs = std::env::var("NEWSPULSE_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let sqlite_path = std::env::var("NEWSPULSE_SQLITE_PATH")
            .unwrap_or_else(|_| String::from("data/analyses.db"))
            .into();

        let level = std::env::var("NEWSPULSE_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));
        let format = std::env::var("NEWSPULSE_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            server: ServerConfig {
                bind_address,
                enable_cors: true,
                enable_request_logging: true,
            },
            providers: ProviderConfig {
                news_api_key,
                news_api_url,
                gnews_api_key,
                gnews_api_url,
                request_timeout_secs,
            },
            database: DatabaseConfig { sqlite_path },
            logging: LoggingConfig { level, format },
        })
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.providers.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        if self.providers.news_api_url.is_empty() || self.providers.gnews_api_url.is_empty() {
            anyhow::bail!("provider base URLs must not be empty");
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!("logging format must be 'text' or 'json'");
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.providers.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_address: "127.0.0.1:3000".parse().expect("static bind address"),
                enable_cors: true,
                enable_request_logging: true,
            },
            providers: ProviderConfig {
                news_api_key: String::new(),
                news_api_url: String::from("https://newsapi.org/v2"),
                gnews_api_key: String::new(),
                gnews_api_url: String::from("https://gnews.io/api/v4"),
                request_timeout_secs: 30,
            },
            database: DatabaseConfig {
                sqlite_path: PathBuf::from("data/analyses.db"),
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}
