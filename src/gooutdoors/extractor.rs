//! Lazy product page extractor.

use super::client::PageFetcher;
use super::error::ScraperError;
use super::identifier::ProductId;
use super::models::ProductSummary;
use super::selectors::FieldSelector;
use super::site::Site;
use scraper::Html;
use std::fmt;
use tracing::{debug, error, warn};

/// Fetches one product page on first use and extracts fields from it.
///
/// No network access happens until an accessor is called. With
/// `cache_document` enabled the parsed page is kept for the lifetime of the
/// scraper; otherwise every accessor fetches the page again. A failed fetch
/// leaves no document behind, so the next accessor call retries.
pub struct ProductScraper<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    site: &'a Site,
    product: ProductId,
    url: String,
    document: Option<Html>,
}

impl<'a, F: PageFetcher + ?Sized> ProductScraper<'a, F> {
    /// Creates a scraper for an identifier like `waterproof-down-jacket-123456`.
    pub fn new(fetcher: &'a F, site: &'a Site, identifier: &str) -> Self {
        let product = ProductId::new(identifier);
        let url = site.product_url(&product);

        Self { fetcher, site, product, url, document: None }
    }

    pub fn identifier(&self) -> &str {
        self.product.identifier()
    }

    pub fn sku(&self) -> &str {
        self.product.sku()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns true if a parsed page is currently held.
    pub fn is_fetched(&self) -> bool {
        self.document.is_some()
    }

    /// Returns the price text, or the configured fallback if absent.
    pub async fn price(&mut self) -> Result<String, ScraperError> {
        let site = self.site;
        let url = self.url.clone();
        let document = self.document().await?;

        Ok(extract_field(
            document,
            site.price_selector(),
            "price",
            &site.options().price_not_found_text,
            &url,
        ))
    }

    /// Returns the title text, or the configured fallback if absent.
    pub async fn title(&mut self) -> Result<String, ScraperError> {
        let site = self.site;
        let url = self.url.clone();
        let document = self.document().await?;

        Ok(extract_field(
            document,
            site.title_selector(),
            "title",
            &site.options().title_not_found_text,
            &url,
        ))
    }

    /// Returns the full serialized page.
    pub async fn html(&mut self) -> Result<String, ScraperError> {
        Ok(self.document().await?.html())
    }

    /// Extracts title and price from a single fetch.
    pub async fn summary(&mut self) -> Result<ProductSummary, ScraperError> {
        let site = self.site;
        let options = site.options();
        let url = self.url.clone();
        let document = self.document().await?;

        let title =
            extract_field(document, site.title_selector(), "title", &options.title_not_found_text, &url);
        let price =
            extract_field(document, site.price_selector(), "price", &options.price_not_found_text, &url);

        Ok(ProductSummary {
            id: self.product.identifier().to_string(),
            sku: self.product.sku().to_string(),
            url,
            title,
            price,
        })
    }

    /// Returns the parsed page, fetching it if needed.
    async fn document(&mut self) -> Result<&Html, ScraperError> {
        let document = match self.document.take() {
            Some(document) if self.site.options().cache_document => document,
            _ => self.fetch_document().await?,
        };

        Ok(self.document.insert(document))
    }

    async fn fetch_document(&self) -> Result<Html, ScraperError> {
        debug!("Fetching product page: {}", self.url);

        match self.fetcher.fetch(&self.url).await {
            Ok(body) => Ok(Html::parse_document(&body)),
            Err(source) => {
                error!("Error getting HTML for '{:?}': {}", self, source);
                Err(ScraperError::Fetch { url: self.url.clone(), source })
            }
        }
    }
}

impl<F: PageFetcher + ?Sized> fmt::Debug for ProductScraper<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductScraper")
            .field("sku", &self.product.sku())
            .field("url", &self.url)
            .field("fetched", &self.document.is_some())
            .finish()
    }
}

/// Returns the field text, or `not_found` with a warning when no element matches.
fn extract_field(
    document: &Html,
    selector: &FieldSelector,
    name: &str,
    not_found: &str,
    url: &str,
) -> String {
    match selector.first_text(document) {
        Some(text) => text,
        None => {
            warn!(
                "Error getting {} from {}: no element matches '{}'",
                name,
                url,
                selector.as_str()
            );
            not_found.to_string()
        }
    }
}
