//! Configuration management
//!
//! This module handles loading and parsing configuration for tagshelf.
//! Configuration can be loaded from:
//! - a YAML file (`tagshelf.yml` by default)
//! - Environment variables (override file settings)
//!
//! Missing optional values are filled with sensible defaults. All values are
//! read once at startup; nothing here changes at runtime.

use crate::models::Tag;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Store (catalog and article generation) configuration
    #[serde(default)]
    pub store: StoreConfig,
    /// Pagination configuration
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Latency simulation configuration
    #[serde(default)]
    pub latency: LatencyConfig,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Number of articles to generate
    #[serde(default = "default_article_count")]
    pub article_count: usize,
    /// Year used for generated dates
    #[serde(default = "default_year")]
    pub year: i32,
    /// Author name on every generated article
    #[serde(default = "default_author_name")]
    pub author_name: String,
    /// Author avatar on every generated article
    #[serde(default = "default_author_avatar")]
    pub author_avatar: String,
    /// Tag catalog override; the built-in catalog is used when absent
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            article_count: default_article_count(),
            year: default_year(),
            author_name: default_author_name(),
            author_avatar: default_author_avatar(),
            tags: None,
        }
    }
}

fn default_article_count() -> usize {
    40
}

fn default_year() -> i32 {
    2024
}

fn default_author_name() -> String {
    "CaoKai".to_string()
}

fn default_author_avatar() -> String {
    "https://q1.qlogo.cn/g?b=qq&nk=2655257336&s=640".to_string()
}

/// Pagination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the caller does not pass one
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> i64 {
    10
}

/// Latency simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Base delay in milliseconds (0 disables the delay)
    #[serde(default = "default_base_ms")]
    pub base_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            base_ms: default_base_ms(),
        }
    }
}

fn default_base_ms() -> u64 {
    400
}

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError {
        path: String,
        message: String,
    },
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl Config {
    /// Load configuration from file
    ///
    /// If the file doesn't exist or is empty, returns default configuration.
    /// If the file exists but is invalid YAML, returns an error with details.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: format_yaml_error(&e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file with environment variable overrides
    ///
    /// Environment variables follow the pattern:
    /// - TAGSHELF_STORE_ARTICLE_COUNT
    /// - TAGSHELF_STORE_YEAR
    /// - TAGSHELF_PAGINATION_PAGE_SIZE
    /// - TAGSHELF_LATENCY_BASE_MS
    pub fn load_with_env(path: &std::path::Path) -> anyhow::Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Check values that cannot be defaulted away
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.article_count == 0 {
            return Err(ConfigError::ValidationError(
                "store.article_count must be positive".to_string(),
            ));
        }
        if self.pagination.page_size <= 0 {
            return Err(ConfigError::ValidationError(
                "pagination.page_size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides to the configuration
    fn apply_env_overrides(&mut self) {
        if let Ok(count) = std::env::var("TAGSHELF_STORE_ARTICLE_COUNT") {
            if let Ok(count) = count.parse::<usize>() {
                self.store.article_count = count;
            }
        }
        if let Ok(year) = std::env::var("TAGSHELF_STORE_YEAR") {
            if let Ok(year) = year.parse::<i32>() {
                self.store.year = year;
            }
        }
        if let Ok(size) = std::env::var("TAGSHELF_PAGINATION_PAGE_SIZE") {
            if let Ok(size) = size.parse::<i64>() {
                self.pagination.page_size = size;
            }
        }
        if let Ok(base) = std::env::var("TAGSHELF_LATENCY_BASE_MS") {
            if let Ok(base) = base.parse::<u64>() {
                self.latency.base_ms = base;
            }
        }
    }
}

/// Format YAML parsing error with location and context
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    if let Some(location) = e.location() {
        format!(
            "at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        )
    } else {
        e.to_string()
    }
}
