//! Error types for page fetching and extraction.

use thiserror::Error;

/// Errors surfaced by [`ProductScraper`](super::ProductScraper) and site setup.
#[derive(Debug, Error)]
pub enum ScraperError {
    /// The product page could not be retrieved.
    #[error("failed to get HTML from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// A configured CSS selector does not parse.
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
}

impl ScraperError {
    /// Returns the URL of the failed fetch, if this is a fetch error.
    pub fn url(&self) -> Option<&str> {
        match self {
            ScraperError::Fetch { url, .. } => Some(url),
            ScraperError::Selector { .. } => None,
        }
    }
}

/// Low-level failure from a single GET.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] wreq::Error),

    #[error("request failed with status: {0}")]
    Status(u16),

    #[error("failed to read response body: {0}")]
    Body(#[source] wreq::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_carries_url() {
        let err = ScraperError::Fetch {
            url: "https://www.gooutdoors.co.uk/123456/jacket-123456".to_string(),
            source: FetchError::Status(404),
        };

        assert_eq!(err.url(), Some("https://www.gooutdoors.co.uk/123456/jacket-123456"));
        let msg = err.to_string();
        assert!(msg.contains("jacket-123456"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn test_fetch_error_source() {
        use std::error::Error;

        let err = ScraperError::Fetch {
            url: "http://localhost/1/a-1".to_string(),
            source: FetchError::Status(503),
        };
        let source = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert_eq!(source, "request failed with status: 503");
    }

    #[test]
    fn test_selector_error_has_no_url() {
        let err = ScraperError::Selector {
            selector: "span[".to_string(),
            reason: "unexpected end".to_string(),
        };
        assert!(err.url().is_none());
        assert!(err.to_string().contains("span["));
    }
}
