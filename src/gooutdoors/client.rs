//! HTTP client for product page requests using wreq.

use super::error::FetchError;
use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;
use wreq::Client;

/// Trait for page fetching - enables mocking for tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Performs a GET and returns the response body.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Go Outdoors HTTP client with configured headers, timeout and proxy.
pub struct GoOutdoorsClient {
    client: Client,
    headers: BTreeMap<String, String>,
}

impl GoOutdoorsClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, headers: config.headers.clone() })
    }
}

#[async_trait]
impl PageFetcher for GoOutdoorsClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let mut request = self.client.get(url);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(FetchError::Transport)?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(FetchError::Body)
    }
}
