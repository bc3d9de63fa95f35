//! Runtime configuration for `reva.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `[store]` | Override record store (endpoint, api key, table) |
//! | `[cache]` | Override snapshot TTL                            |
//! | `[image]` | Responsive defaults (width ladder, quality)      |
//!
//! A missing config file yields the defaults; every image then resolves
//! to its built-in URL and the CLI works purely offline.

mod error;

pub use error::ConfigError;

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::log;
use crate::transform::DEFAULT_WIDTHS;

/// Root configuration structure representing reva.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Override record store settings
    pub store: StoreConfig,

    /// Snapshot caching settings
    pub cache: CacheConfig,

    /// Responsive image defaults
    pub image: ImageConfig,
}

/// `[store]`: the external override record store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base endpoint, e.g. `https://project.store.example.com`.
    /// Unset means no remote store; overrides come from files or not
    /// at all.
    pub endpoint: Option<String>,

    /// Public (anon) API key sent with every query.
    pub api_key: Option<String>,

    /// Table holding override records.
    pub table: String,
}

/// `[cache]`: snapshot lifetime.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Seconds an override snapshot is served before refetching.
    pub ttl_secs: u64,
}

/// `[image]`: responsive defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Width ladder used when a caller supplies none.
    pub widths: Vec<u32>,

    /// Default compression quality for variant URLs.
    pub quality: Option<i32>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            table: "image_overrides".to_string(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_secs: 300 }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            widths: DEFAULT_WIDTHS.to_vec(),
            quality: None,
        }
    }
}

impl DeliveryConfig {
    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// Unknown fields are warned about and ignored; typos in a config
    /// must never take the site down.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;

        if !ignored.is_empty() {
            log!("warning"; "unknown config fields, ignoring:");
            for field in &ignored {
                eprintln!("- {field}");
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from a file path; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Validate, collecting every problem before reporting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.cache.ttl_secs == 0 {
            errors.push("[cache] ttl_secs must be at least 1".to_string());
        }
        if self.image.widths.is_empty() {
            errors.push("[image] widths must not be empty".to_string());
        }
        if self.image.widths.iter().any(|&w| w == 0) {
            errors.push("[image] widths must be positive".to_string());
        }
        if let Some(quality) = self.image.quality
            && !(1..=100).contains(&quality)
        {
            errors.push(format!(
                "[image] quality must be within 1..=100, got {quality}"
            ));
        }
        if let Some(endpoint) = &self.store.endpoint
            && !endpoint.starts_with("http://")
            && !endpoint.starts_with("https://")
        {
            errors.push(format!(
                "[store] endpoint must be an http(s) URL, got `{endpoint}`"
            ));
        }
        if self.store.table.is_empty() {
            errors.push("[store] table must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
