//! Page configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the product detail page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PdpConfig {
    /// Content store connection.
    #[serde(default)]
    pub content: ContentConfig,

    /// Site-level settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Confirmation banner settings.
    #[serde(default)]
    pub banner: BannerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PdpConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            Self::from_toml(&content).with_context(|| format!("Failed to load config: {}", path))
        }
    }

    /// Parse config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML config")
    }
}

/// Hosted content store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Project identifier in the hosted content store.
    #[serde(default)]
    pub project_id: String,

    /// Dataset name.
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Query API version (a date such as `2024-01-01`).
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Query the CDN edge instead of the live API.
    #[serde(default = "default_true")]
    pub use_cdn: bool,

    /// Read token for private datasets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_dataset() -> String {
    "production".to_string()
}

fn default_api_version() -> String {
    "2024-01-01".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: default_dataset(),
            api_version: default_api_version(),
            use_cdn: true,
            token: None,
        }
    }
}

/// Site settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Store name, used in page titles.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Public base URL, used to build share links.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// ISO currency code for displayed prices.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_site_name() -> String {
    "Store".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
            currency: default_currency(),
        }
    }
}

/// Confirmation banner settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerConfig {
    /// How long a confirmation banner stays visible.
    #[serde(default = "default_banner_ms")]
    pub duration_ms: u64,
}

fn default_banner_ms() -> u64 {
    3000
}

impl BannerConfig {
    /// Banner duration as a `Duration`.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_banner_ms(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn or error.
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format: json or human.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PdpConfig::from_toml("").unwrap();
        assert_eq!(config, PdpConfig::default());
        assert_eq!(config.banner.duration(), Duration::from_millis(3000));
        assert_eq!(config.site.currency, "USD");
        assert!(config.content.use_cdn);
    }

    #[test]
    fn test_partial_config() {
        let config = PdpConfig::from_toml(
            r#"
[content]
project_id = "abc123"
token = "secret"

[site]
base_url = "https://shop.example"

[banner]
duration_ms = 1500
"#,
        )
        .unwrap();

        assert_eq!(config.content.project_id, "abc123");
        assert_eq!(config.content.dataset, "production");
        assert_eq!(config.content.token.as_deref(), Some("secret"));
        assert_eq!(config.site.base_url, "https://shop.example");
        assert_eq!(config.site.name, "Store");
        assert_eq!(config.banner.duration_ms, 1500);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(PdpConfig::from_toml("[banner]\nduration_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = PdpConfig::load("/nonexistent/pdp.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
