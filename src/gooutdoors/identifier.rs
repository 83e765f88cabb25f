//! Product identifiers as they appear in Go Outdoors URLs.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A product identifier such as `waterproof-down-jacket-123456`.
///
/// The SKU is the final `-`-delimited segment. No other validation is done:
/// an identifier without `-` is its own SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductId {
    identifier: String,
    sku: String,
}

impl ProductId {
    /// Parses an identifier, deriving the SKU from its last segment.
    pub fn new(identifier: impl AsRef<str>) -> Self {
        let identifier = identifier.as_ref();
        let sku = identifier.rsplit('-').next().unwrap_or(identifier);

        Self { identifier: identifier.to_string(), sku: sku.to_string() }
    }

    /// Returns the full identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the stock-keeping unit.
    pub fn sku(&self) -> &str {
        &self.sku
    }
}

impl FromStr for ProductId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_is_last_segment() {
        let id = ProductId::new("waterproof-down-jacket-123456");
        assert_eq!(id.sku(), "123456");
        assert_eq!(id.identifier(), "waterproof-down-jacket-123456");
    }

    #[test]
    fn test_sku_without_dash() {
        let id = ProductId::new("123456");
        assert_eq!(id.sku(), "123456");
        assert_eq!(id.identifier(), "123456");
    }

    #[test]
    fn test_sku_trailing_dash() {
        // Last segment is empty; no validation beyond the split
        let id = ProductId::new("jacket-");
        assert_eq!(id.sku(), "");
    }

    #[test]
    fn test_identifier_kept_verbatim() {
        // Whitespace is part of the identifier; only the split applies
        let id = ProductId::new(" 123456");
        assert_eq!(id.identifier(), " 123456");
        assert_eq!(id.sku(), " 123456");

        let id = ProductId::new("tent-987654 ");
        assert_eq!(id.sku(), "987654 ");
    }

    #[test]
    fn test_empty_identifier() {
        let id = ProductId::new("");
        assert_eq!(id.identifier(), "");
        assert_eq!(id.sku(), "");
    }

    #[test]
    fn test_from_str_and_display() {
        let id: ProductId = "trail-shoe-555".parse().unwrap();
        assert_eq!(id.sku(), "555");
        assert_eq!(id.to_string(), "trail-shoe-555");
    }
}
