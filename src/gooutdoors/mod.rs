//! Go Outdoors product pages: identifiers, HTTP client, selectors and extraction.

pub mod client;
pub mod error;
pub mod extractor;
pub mod identifier;
pub mod models;
pub mod selectors;
pub mod site;

pub use client::{GoOutdoorsClient, PageFetcher};
pub use error::{FetchError, ScraperError};
pub use extractor::ProductScraper;
pub use identifier::ProductId;
pub use models::ProductSummary;
pub use site::Site;
