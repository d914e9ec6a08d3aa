//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::ebay::markets::Marketplace;
use crate::ebay::models::Condition;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// eBay marketplace to search
    #[serde(default)]
    pub marketplace: Marketplace,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Base delay between requests in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Random jitter added to delay (0 to this value)
    #[serde(default = "default_delay_jitter_ms")]
    pub delay_jitter_ms: u64,

    /// Default number of result pages to fetch
    #[serde(default = "default_pages")]
    pub pages: u32,

    /// Default item condition filter
    #[serde(default)]
    pub condition: Option<Condition>,

    /// Default minimum price bound
    #[serde(default)]
    pub min_price: Option<String>,

    /// Default maximum price bound
    #[serde(default)]
    pub max_price: Option<String>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_delay_jitter_ms() -> u64 {
    3000
}

fn default_pages() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marketplace: Marketplace::default(),
            proxy: None,
            delay_ms: default_delay_ms(),
            delay_jitter_ms: default_delay_jitter_ms(),
            pages: default_pages(),
            condition: None,
            min_price: None,
            max_price: None,
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("ebay-soldstats").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(marketplace) = std::env::var("EBAY_MARKETPLACE") {
            if let Ok(m) = marketplace.parse() {
                self.marketplace = m;
            }
        }

        if let Ok(proxy) = std::env::var("EBAY_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(delay) = std::env::var("EBAY_DELAY") {
            if let Ok(d) = delay.parse() {
                self.delay_ms = d;
            }
        }

        self
    }
}

/// Output format for the search summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.marketplace, Marketplace::Uk);
        assert_eq!(config.delay_ms, 2000);
        assert_eq!(config.delay_jitter_ms, 3000);
        assert_eq!(config.pages, 1);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.proxy.is_none());
        assert!(config.condition.is_none());
        assert!(config.min_price.is_none());
        assert!(config.max_price.is_none());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);

        let err = "invalid".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("Unknown format"));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            marketplace = "us"
            delay_ms = 3000
            pages = 3
            condition = "used"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.marketplace, Marketplace::Us);
        assert_eq!(config.delay_ms, 3000);
        assert_eq!(config.pages, 3);
        assert_eq!(config.condition, Some(Condition::Used));
    }

    #[test]
    fn test_config_from_toml_all_fields() {
        let toml = r#"
            marketplace = "de"
            proxy = "socks5://localhost:1080"
            delay_ms = 5000
            delay_jitter_ms = 2000
            pages = 5
            condition = "new"
            min_price = "10"
            max_price = "100"
            format = "json"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.marketplace, Marketplace::De);
        assert_eq!(config.proxy, Some("socks5://localhost:1080".to_string()));
        assert_eq!(config.delay_ms, 5000);
        assert_eq!(config.delay_jitter_ms, 2000);
        assert_eq!(config.pages, 5);
        assert_eq!(config.condition, Some(Condition::New));
        assert_eq!(config.min_price, Some("10".to_string()));
        assert_eq!(config.max_price, Some("100".to_string()));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            marketplace = "fr"
            delay_ms = 4000
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.marketplace, Marketplace::Fr);
        assert_eq!(config.delay_ms, 4000);
    }

    #[test]
    fn test_config_from_file_not_found() {
        let result = Config::from_file("/nonexistent/path/config.toml");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();

        let result = Config::from_file(file.path());
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            marketplace = "it"
            pages = 2
            "#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.marketplace, Marketplace::It);
        assert_eq!(config.pages, 2);
    }

    #[test]
    fn test_config_with_env() {
        // Save original env vars
        let orig_marketplace = std::env::var("EBAY_MARKETPLACE").ok();
        let orig_proxy = std::env::var("EBAY_PROXY").ok();
        let orig_delay = std::env::var("EBAY_DELAY").ok();

        std::env::set_var("EBAY_MARKETPLACE", "au");
        std::env::set_var("EBAY_PROXY", "http://proxy:8080");
        std::env::set_var("EBAY_DELAY", "5000");

        let config = Config::new().with_env();
        assert_eq!(config.marketplace, Marketplace::Au);
        assert_eq!(config.proxy, Some("http://proxy:8080".to_string()));
        assert_eq!(config.delay_ms, 5000);

        // Restore original env vars
        match orig_marketplace {
            Some(v) => std::env::set_var("EBAY_MARKETPLACE", v),
            None => std::env::remove_var("EBAY_MARKETPLACE"),
        }
        match orig_proxy {
            Some(v) => std::env::set_var("EBAY_PROXY", v),
            None => std::env::remove_var("EBAY_PROXY"),
        }
        match orig_delay {
            Some(v) => std::env::set_var("EBAY_DELAY", v),
            None => std::env::remove_var("EBAY_DELAY"),
        }
    }

    #[test]
    fn test_config_with_env_invalid_values() {
        let orig_marketplace = std::env::var("EBAY_MARKETPLACE").ok();
        let orig_delay = std::env::var("EBAY_DELAY").ok();

        std::env::set_var("EBAY_MARKETPLACE", "invalid_market");
        std::env::set_var("EBAY_DELAY", "not_a_number");

        let config = Config::new().with_env();
        // Invalid values should be ignored, keeping defaults
        assert_eq!(config.marketplace, Marketplace::Uk);
        assert_eq!(config.delay_ms, 2000);

        match orig_marketplace {
            Some(v) => std::env::set_var("EBAY_MARKETPLACE", v),
            None => std::env::remove_var("EBAY_MARKETPLACE"),
        }
        match orig_delay {
            Some(v) => std::env::set_var("EBAY_DELAY", v),
            None => std::env::remove_var("EBAY_DELAY"),
        }
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            marketplace: Marketplace::Us,
            proxy: Some("socks5://localhost:1080".to_string()),
            delay_ms: 3000,
            delay_jitter_ms: 1500,
            pages: 4,
            condition: Some(Condition::Refurbished),
            min_price: Some("25".to_string()),
            max_price: None,
            format: OutputFormat::Json,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.marketplace, config.marketplace);
        assert_eq!(parsed.proxy, config.proxy);
        assert_eq!(parsed.delay_ms, config.delay_ms);
        assert_eq!(parsed.pages, config.pages);
        assert_eq!(parsed.condition, config.condition);
        assert_eq!(parsed.min_price, config.min_price);
        assert_eq!(parsed.format, config.format);
    }
}
