//! Configuration management for cfxscan
//!
//! Configuration is loaded from environment variables or a TOML file, then
//! adjusted by command-line flags and validated once before any request is made.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Browser user agent the directory service accepts
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.45 Safari/537.36";

pub const DEFAULT_DIRECTORY_URL: &str = "https://servers-frontend.fivem.net/api/servers/";
pub const DEFAULT_DETAIL_BASE_URL: &str = "https://servers-frontend.fivem.net/api/servers/single/";
pub const DEFAULT_REFERER: &str = "https://servers.fivem.net/";

/// Upper bound on in-flight detail requests
pub const MAX_CONCURRENCY: usize = 64;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote API configuration
    pub api: ApiConfig,

    /// Scan configuration
    pub scan: ScanConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Directory endpoint listing every active server
    pub directory_url: String,

    /// Base URL of the per-server endpoint; the server id is appended
    pub detail_base_url: String,

    /// User agent string
    pub user_agent: String,

    /// Referer header sent with every request
    pub referer: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Player scan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum number of detail requests in flight
    pub max_concurrent_requests: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            detail_base_url: DEFAULT_DETAIL_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_concurrent_requests: 16,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let directory_url =
            std::env::var("CFXSCAN_DIRECTORY_URL").unwrap_or(defaults.api.directory_url);

        let detail_base_url =
            std::env::var("CFXSCAN_DETAIL_URL").unwrap_or(defaults.api.detail_base_url);

        let user_agent = std::env::var("CFXSCAN_USER_AGENT").unwrap_or(defaults.api.user_agent);

        let referer = std::env::var("CFXSCAN_REFERER").unwrap_or(defaults.api.referer);

        let request_timeout_secs = std::env::var("CFXSCAN_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults.api.request_timeout_secs);

        let max_concurrent_requests = std::env::var("CFXSCAN_MAX_CONCURRENT_REQUESTS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.scan.max_concurrent_requests);

        let log_level = std::env::var("CFXSCAN_LOG_LEVEL").unwrap_or(defaults.logging.level);

        let log_format = std::env::var("CFXSCAN_LOG_FORMAT").unwrap_or(defaults.logging.format);

        Ok(Self {
            api: ApiConfig {
                directory_url,
                detail_base_url,
                user_agent,
                referer,
                request_timeout_secs,
            },
            scan: ScanConfig {
                max_concurrent_requests,
            },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api.directory_url.trim().is_empty() {
            anyhow::bail!("directory_url must not be empty");
        }

        if self.api.detail_base_url.trim().is_empty() {
            anyhow::bail!("detail_base_url must not be empty");
        }

        if self.api.user_agent.trim().is_empty() {
            anyhow::bail!("user_agent must not be empty");
        }

        if self.api.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        if self.scan.max_concurrent_requests == 0 {
            anyhow::bail!("max_concurrent_requests must be greater than 0");
        }

        if self.scan.max_concurrent_requests > MAX_CONCURRENCY {
            anyhow::bail!("max_concurrent_requests must be at most {MAX_CONCURRENCY}");
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.api.request_timeout()
    }
}

impl ApiConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
