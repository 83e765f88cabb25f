//! Data models for extracted product fields.

use serde::{Deserialize, Serialize};

/// Fields extracted from one product page.
///
/// `title` and `price` hold the configured "not found" text when the page
/// lacks the element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Full product identifier
    pub id: String,
    /// Stock-keeping unit
    pub sku: String,
    /// Product page URL
    pub url: String,
    /// Product title
    pub title: String,
    /// Price text as shown on the page
    pub price: String,
}
