//! Output formatting for products (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::gooutdoors::ProductSummary;

/// Formats products for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single product.
    pub fn format_product(&self, product: &ProductSummary) -> String {
        match self.format {
            OutputFormat::Json => self.json_single(product),
            OutputFormat::Table => self.table_single(product),
            OutputFormat::Markdown => self.markdown_single(product),
            OutputFormat::Csv => self.csv_products(std::slice::from_ref(product)),
        }
    }

    /// Formats multiple products.
    pub fn format_products(&self, products: &[ProductSummary]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Markdown => self.markdown_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    // JSON formatting

    fn json_single(&self, product: &ProductSummary) -> String {
        serde_json::to_string_pretty(product).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_products(&self, products: &[ProductSummary]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_single(&self, product: &ProductSummary) -> String {
        [
            format!("ID:      {}", product.id),
            format!("SKU:     {}", product.sku),
            format!("Title:   {}", product.title),
            format!("Price:   {}", product.price),
            format!("URL:     {}", product.url),
        ]
        .join("\n")
    }

    fn table_products(&self, products: &[ProductSummary]) -> String {
        let sku_width = products.iter().map(|p| p.sku.chars().count()).max().unwrap_or(0).max(3);
        let price_width = 16;
        let title_width = 50;

        let mut lines = Vec::new();

        lines.push(format!("{:<sku_width$}  {:<price_width$}  {}", "SKU", "Price", "Title"));
        lines.push(format!("{:-<sku_width$}  {:-<price_width$}  {:-<title_width$}", "", "", ""));

        for product in products {
            lines.push(format!(
                "{:<sku_width$}  {:>price_width$}  {}",
                product.sku,
                product.price,
                truncate(&product.title, title_width)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", products.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_single(&self, product: &ProductSummary) -> String {
        [
            format!("## {}", product.title),
            String::new(),
            format!("- **SKU:** {}", product.sku),
            format!("- **Price:** {}", product.price),
            format!("- **URL:** [View on Go Outdoors]({})", product.url),
        ]
        .join("\n")
    }

    fn markdown_products(&self, products: &[ProductSummary]) -> String {
        let mut lines = Vec::new();

        lines.push("| SKU | Price | Title |".to_string());
        lines.push("|-----|-------|-------|".to_string());

        for product in products {
            lines.push(format!(
                "| {} | {} | [{}]({}) |",
                product.sku,
                product.price,
                truncate(&product.title, 40),
                product.url
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", products.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "id,sku,title,price,url".to_string()
    }

    fn csv_products(&self, products: &[ProductSummary]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for product in products {
            lines.push(format!(
                "{},{},{},{},{}",
                Self::csv_escape(&product.id),
                Self::csv_escape(&product.sku),
                Self::csv_escape(&product.title),
                Self::csv_escape(&product.price),
                product.url
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

/// Shortens text to `max` characters, ending in "...".
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}
