//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::ExpectedStatusTable;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Upstream site roots
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Output and state locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Response cache behavior
    #[serde(default)]
    pub cache: CacheConfig,

    /// Run-level policy
    #[serde(default)]
    pub run: RunConfig,

    /// Status code to accepted displayed statuses
    #[serde(default)]
    pub expected_status: ExpectedStatusTable,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.http.download_timeout_secs == 0 {
            return Err(AppError::validation(
                "http.download_timeout_secs must be > 0",
            ));
        }
        url::Url::parse(&self.sources.docs_url)
            .map_err(|e| AppError::validation(format!("sources.docs_url: {e}")))?;
        url::Url::parse(&self.sources.peps_url)
            .map_err(|e| AppError::validation(format!("sources.peps_url: {e}")))?;
        if self.expected_status.is_empty() {
            return Err(AppError::validation("expected_status table is empty"));
        }
        if let Some(code) = self
            .expected_status
            .codes()
            .find(|code| code.chars().count() > 1)
        {
            return Err(AppError::validation(format!(
                "expected_status code '{code}' must be a single character or empty"
            )));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Timeout in seconds for archive downloads, body included
    #[serde(default = "defaults::download_timeout")]
    pub download_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            download_timeout_secs: defaults::download_timeout(),
        }
    }
}

/// Upstream site roots. Every other page is resolved against these.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "defaults::docs_url")]
    pub docs_url: String,

    #[serde(default = "defaults::peps_url")]
    pub peps_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            docs_url: defaults::docs_url(),
            peps_url: defaults::peps_url(),
        }
    }
}

/// Filesystem locations, relative to the working directory unless absolute.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "defaults::cache_dir")]
    pub cache_dir: PathBuf,

    #[serde(default = "defaults::downloads_dir")]
    pub downloads_dir: PathBuf,

    #[serde(default = "defaults::results_dir")]
    pub results_dir: PathBuf,

    #[serde(default = "defaults::log_file")]
    pub log_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            cache_dir: defaults::cache_dir(),
            downloads_dir: defaults::downloads_dir(),
            results_dir: defaults::results_dir(),
            log_file: defaults::log_file(),
        }
    }
}

/// Response cache settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Serve repeated requests from the on-disk cache
    #[serde(default = "defaults::enabled")]
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::enabled(),
        }
    }
}

/// What a fatal error does to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log the error and exit non-zero
    #[default]
    Strict,
    /// Log the error and exit zero
    Tolerant,
}

/// Run-level settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub on_error: ErrorPolicy,

    /// Show a progress bar for per-item loops
    #[serde(default = "defaults::enabled")]
    pub show_progress: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::default(),
            show_progress: defaults::enabled(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; pydocs-scraper/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn download_timeout() -> u64 {
        600
    }

    // Source defaults
    pub fn docs_url() -> String {
        "https://docs.python.org/3/".into()
    }
    pub fn peps_url() -> String {
        "https://peps.python.org/".into()
    }

    // Path defaults
    pub fn cache_dir() -> PathBuf {
        PathBuf::from(".cache/http")
    }
    pub fn downloads_dir() -> PathBuf {
        PathBuf::from("downloads")
    }
    pub fn results_dir() -> PathBuf {
        PathBuf::from("results")
    }
    pub fn log_file() -> PathBuf {
        PathBuf::from("logs/parser.log")
    }

    pub fn enabled() -> bool {
        true
    }
}
