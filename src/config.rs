//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::gooutdoors::selectors::product;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site URL layout and selectors
    #[serde(default)]
    pub site: SiteConfig,

    /// Extraction behaviour
    #[serde(default)]
    pub scraper: ScraperOptions,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Headers sent with every request
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Where product pages live and how to find fields on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Scheme and host, e.g. `https://www.gooutdoors.co.uk`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Product URL template with `{base_url}`, `{sku}` and `{id}` placeholders
    #[serde(default = "default_url_template")]
    pub url_template: String,

    /// CSS selector for the price element
    #[serde(default = "default_price_selector")]
    pub price_selector: String,

    /// CSS selector for the title element
    #[serde(default = "default_title_selector")]
    pub title_selector: String,
}

/// Options that control fetching and missing-field fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperOptions {
    /// Keep the parsed page for the lifetime of the scraper
    #[serde(default = "default_cache_document")]
    pub cache_document: bool,

    /// Returned when the price element is absent
    #[serde(default = "default_price_not_found_text")]
    pub price_not_found_text: String,

    /// Returned when the title element is absent
    #[serde(default = "default_title_not_found_text")]
    pub title_not_found_text: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "User-Agent".to_string(),
            "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0".to_string(),
        ),
        (
            "Accept".to_string(),
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
        ),
        ("Accept-Language".to_string(), "en-GB,en;q=0.9".to_string()),
    ])
}

fn default_base_url() -> String {
    "https://www.gooutdoors.co.uk".to_string()
}

fn default_url_template() -> String {
    "{base_url}/{sku}/{id}".to_string()
}

fn default_price_selector() -> String {
    product::PRICE.to_string()
}

fn default_title_selector() -> String {
    product::TITLE.to_string()
}

fn default_cache_document() -> bool {
    true
}

fn default_price_not_found_text() -> String {
    "Price not found".to_string()
}

fn default_title_not_found_text() -> String {
    "Title not found".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            url_template: default_url_template(),
            price_selector: default_price_selector(),
            title_selector: default_title_selector(),
        }
    }
}

impl Default for ScraperOptions {
    fn default() -> Self {
        Self {
            cache_document: default_cache_document(),
            price_not_found_text: default_price_not_found_text(),
            title_not_found_text: default_title_not_found_text(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            scraper: ScraperOptions::default(),
            proxy: None,
            timeout_secs: default_timeout_secs(),
            headers: default_headers(),
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
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("gooutdoors-scraper").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(base_url) = std::env::var("GOOUTDOORS_BASE_URL") {
            self.site.base_url = base_url;
        }

        if let Ok(proxy) = std::env::var("GOOUTDOORS_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(timeout) = std::env::var("GOOUTDOORS_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }

        self
    }
}

/// Output format for results.
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
