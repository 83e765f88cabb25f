//! Compiled site profile: URL layout, field selectors and extraction options.

use super::error::ScraperError;
use super::identifier::ProductId;
use super::selectors::{self, FieldSelector};
use crate::config::{ScraperOptions, SiteConfig};

/// A ready-to-use site profile built from [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct Site {
    base_url: String,
    url_template: String,
    price: FieldSelector,
    title: FieldSelector,
    options: ScraperOptions,
}

impl Site {
    /// Compiles the configured selectors into a site profile.
    pub fn from_config(config: &SiteConfig, options: ScraperOptions) -> Result<Self, ScraperError> {
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            url_template: config.url_template.clone(),
            price: FieldSelector::parse(&config.price_selector)?,
            title: FieldSelector::parse(&config.title_selector)?,
            options,
        })
    }

    /// Returns the Go Outdoors profile pointed at a different host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string(), ..Self::default() }
    }

    /// Replaces the extraction options.
    pub fn with_options(mut self, options: ScraperOptions) -> Self {
        self.options = options;
        self
    }

    /// Renders the product page URL for an identifier.
    ///
    /// Identifier and SKU are substituted as given, without encoding.
    pub fn product_url(&self, product: &ProductId) -> String {
        self.url_template
            .replace("{base_url}", &self.base_url)
            .replace("{sku}", product.sku())
            .replace("{id}", product.identifier())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn price_selector(&self) -> &FieldSelector {
        &self.price
    }

    pub fn title_selector(&self) -> &FieldSelector {
        &self.title
    }

    pub fn options(&self) -> &ScraperOptions {
        &self.options
    }
}

impl Default for Site {
    fn default() -> Self {
        let config = SiteConfig::default();
        Self {
            base_url: config.base_url,
            url_template: config.url_template,
            price: selectors::PRICE.clone(),
            title: selectors::TITLE.clone(),
            options: ScraperOptions::default(),
        }
    }
}
