//! CLI command implementations.

pub mod html;
pub mod product;

pub use html::HtmlCommand;
pub use product::ProductCommand;
