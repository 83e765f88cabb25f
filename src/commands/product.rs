//! Product lookup command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::gooutdoors::{GoOutdoorsClient, PageFetcher, ProductScraper, ProductSummary, Site};
use anyhow::{Context, Result};
use tracing::info;

/// Executes a product lookup by identifier.
pub struct ProductCommand {
    config: Config,
}

impl ProductCommand {
    /// Creates a new product command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches a product and returns formatted output.
    pub async fn execute(&self, id: &str) -> Result<String> {
        let client = GoOutdoorsClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, id).await
    }

    /// Fetches a product with a provided client (for testing).
    pub async fn execute_with_client(&self, client: &impl PageFetcher, id: &str) -> Result<String> {
        let site = self.site()?;

        let id = id.trim();
        info!("Looking up product: {}", id);

        let mut scraper = ProductScraper::new(client, &site, id);
        let product = scraper.summary().await?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_product(&product))
    }

    /// Fetches multiple products.
    pub async fn execute_batch(&self, ids: &[String]) -> Result<String> {
        let client = GoOutdoorsClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_batch_with_client(&client, ids).await
    }

    /// Fetches multiple products with a provided client (for testing).
    pub async fn execute_batch_with_client(
        &self,
        client: &impl PageFetcher,
        ids: &[String],
    ) -> Result<String> {
        let site = self.site()?;
        let mut products: Vec<ProductSummary> = Vec::new();

        for id in ids {
            let id = id.trim();
            info!("Looking up product: {}", id);

            let mut scraper = ProductScraper::new(client, &site, id);
            match scraper.summary().await {
                Ok(product) => products.push(product),
                Err(e) => eprintln!("Failed to fetch {}: {}", id, e),
            }
        }

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_products(&products))
    }

    fn site(&self) -> Result<Site> {
        Site::from_config(&self.config.site, self.config.scraper.clone())
            .context("Invalid site configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::gooutdoors::FetchError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock client serving one page, failing for SKUs listed in `missing`.
    struct MockClient {
        html: String,
        missing: Vec<&'static str>,
        calls: AtomicUsize,
    }

    impl MockClient {
        fn new(html: String) -> Self {
            Self { html, missing: Vec::new(), calls: AtomicUsize::new(0) }
        }

        fn failing() -> Self {
            Self { html: String::new(), missing: vec!["/"], calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl PageFetcher for MockClient {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.missing.iter().any(|m| url.contains(m)) {
                Err(FetchError::Status(404))
            } else {
                Ok(self.html.clone())
            }
        }
    }

    fn make_product_html(title: &str, price: &str) -> String {
        format!(
            r#"<html><body>
                <h1><span class="product-name">{}</span></h1>
                <div class="price-box"><span class="regular-price">{}</span></div>
            </body></html>"#,
            title, price
        )
    }

    #[tokio::test]
    async fn test_product_command_basic() {
        let client = MockClient::new(make_product_html("Trail Running Shoe", "£89.00"));
        let cmd = ProductCommand::new(Config::default());

        let output = cmd.execute_with_client(&client, "trail-running-shoe-246810").await.unwrap();
        assert!(output.contains("Trail Running Shoe"));
        assert!(output.contains("£89.00"));
        assert!(output.contains("246810"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_product_command_trims_id() {
        let client = MockClient::new(make_product_html("Tent", "£199.00"));
        let config = Config { format: OutputFormat::Json, ..Config::default() };
        let cmd = ProductCommand::new(config);

        let output = cmd.execute_with_client(&client, "  tent-1\n").await.unwrap();
        let product: ProductSummary = serde_json::from_str(&output).unwrap();
        assert_eq!(product.id, "tent-1");
        assert_eq!(product.sku, "1");
        assert_eq!(product.url, "https://www.gooutdoors.co.uk/1/tent-1");
    }

    #[tokio::test]
    async fn test_product_command_json_format() {
        let client = MockClient::new(make_product_html("Tent", "£199.00"));
        let config = Config { format: OutputFormat::Json, ..Config::default() };
        let cmd = ProductCommand::new(config);

        let output = cmd.execute_with_client(&client, "tent-1").await.unwrap();
        let product: ProductSummary = serde_json::from_str(&output).unwrap();
        assert_eq!(product.sku, "1");
        assert_eq!(product.price, "£199.00");
    }

    #[tokio::test]
    async fn test_product_command_missing_fields() {
        let client = MockClient::new("<html><body></body></html>".to_string());
        let config = Config { format: OutputFormat::Json, ..Config::default() };
        let cmd = ProductCommand::new(config);

        let output = cmd.execute_with_client(&client, "tent-1").await.unwrap();
        let product: ProductSummary = serde_json::from_str(&output).unwrap();
        assert_eq!(product.title, "Title not found");
        assert_eq!(product.price, "Price not found");
    }

    #[tokio::test]
    async fn test_product_command_network_error() {
        let client = MockClient::failing();
        let cmd = ProductCommand::new(Config::default());

        let result = cmd.execute_with_client(&client, "tent-1").await;
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("404"));
        assert!(err.contains("https://www.gooutdoors.co.uk/1/tent-1"));
    }

    #[tokio::test]
    async fn test_product_command_invalid_selector() {
        let client = MockClient::new(String::new());
        let mut config = Config::default();
        config.site.title_selector = "h1[".to_string();
        let cmd = ProductCommand::new(config);

        let result = cmd.execute_with_client(&client, "tent-1").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid site configuration"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_product_command_batch_skips_failures() {
        let mut client = MockClient::new(make_product_html("Fleece", "£25.00"));
        client.missing = vec!["/222/"];
        let config = Config { format: OutputFormat::Json, ..Config::default() };
        let cmd = ProductCommand::new(config);

        let ids = vec!["fleece-111".to_string(), "fleece-222".to_string(), "fleece-333".to_string()];
        let output = cmd.execute_batch_with_client(&client, &ids).await.unwrap();

        let products: Vec<ProductSummary> = serde_json::from_str(&output).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].sku, "111");
        assert_eq!(products[1].sku, "333");
        assert_eq!(client.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_product_command_batch_all_failed() {
        let client = MockClient::failing();
        let cmd = ProductCommand::new(Config::default());

        let ids = vec!["a-1".to_string(), "b-2".to_string()];
        let output = cmd.execute_batch_with_client(&client, &ids).await.unwrap();
        assert_eq!(output, "No products found.");
    }
}
