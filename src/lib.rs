//! gooutdoors-scraper - price and title lookup for Go Outdoors product pages
//!
//! Builds the product URL from an identifier such as
//! `waterproof-down-jacket-123456`, fetches the page once and extracts
//! fields with CSS selectors.

pub mod commands;
pub mod config;
pub mod format;
pub mod gooutdoors;

pub use config::{Config, ScraperOptions, SiteConfig};
pub use gooutdoors::{
    FetchError, GoOutdoorsClient, PageFetcher, ProductId, ProductScraper, ProductSummary,
    ScraperError, Site,
};
