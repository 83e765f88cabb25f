//! Raw page dump command.

use crate::config::Config;
use crate::gooutdoors::{GoOutdoorsClient, PageFetcher, ProductScraper, Site};
use anyhow::{Context, Result};
use tracing::info;

/// Prints the serialized product page, useful when updating selectors.
pub struct HtmlCommand {
    config: Config,
}

impl HtmlCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches a product page and returns its HTML.
    pub async fn execute(&self, id: &str) -> Result<String> {
        let client = GoOutdoorsClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, id).await
    }

    /// Fetches a product page with a provided client (for testing).
    pub async fn execute_with_client(&self, client: &impl PageFetcher, id: &str) -> Result<String> {
        let site = Site::from_config(&self.config.site, self.config.scraper.clone())
            .context("Invalid site configuration")?;

        let mut scraper = ProductScraper::new(client, &site, id.trim());
        info!("Fetching page: {}", scraper.url());

        Ok(scraper.html().await?)
    }
}
