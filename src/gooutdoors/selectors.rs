//! CSS selectors for Go Outdoors product pages.
//!
//! Defaults for the current site markup live here. Both selectors can be
//! overridden from the `[site]` section of the config file when the markup
//! changes.

use super::error::ScraperError;
use scraper::{ElementRef, Html, Selector};
use std::fmt;
use std::sync::LazyLock;

/// Default selector source text for product pages.
pub mod product {
    /// Regular (non-sale) price.
    pub const PRICE: &str = "span.regular-price";

    /// Product name.
    pub const TITLE: &str = "span.product-name";
}

/// Compiled default price selector.
pub static PRICE: LazyLock<FieldSelector> =
    LazyLock::new(|| FieldSelector::parse(product::PRICE).unwrap());

/// Compiled default title selector.
pub static TITLE: LazyLock<FieldSelector> =
    LazyLock::new(|| FieldSelector::parse(product::TITLE).unwrap());

/// A compiled selector that remembers its source text for logging.
#[derive(Clone)]
pub struct FieldSelector {
    css: String,
    selector: Selector,
}

impl FieldSelector {
    /// Compiles a CSS selector.
    pub fn parse(css: &str) -> Result<Self, ScraperError> {
        let selector = Selector::parse(css).map_err(|e| ScraperError::Selector {
            selector: css.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { css: css.to_string(), selector })
    }

    /// Returns the selector source text.
    pub fn as_str(&self) -> &str {
        &self.css
    }

    /// Returns the first matching element in the document.
    pub fn first<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        document.select(&self.selector).next()
    }

    /// Returns the trimmed text of the first matching element.
    pub fn first_text(&self, document: &Html) -> Option<String> {
        self.first(document).map(|e| e.text().collect::<String>().trim().to_string())
    }
}

impl fmt::Debug for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldSelector").field(&self.css).finish()
    }
}
