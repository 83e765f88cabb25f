//! gooutdoors-scraper - price and title lookup for Go Outdoors product pages

use anyhow::Result;
use clap::{Parser, Subcommand};
use gooutdoors_scraper::commands::{HtmlCommand, ProductCommand};
use gooutdoors_scraper::config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gooutdoors-scraper",
    version,
    about = "Look up Go Outdoors product prices and titles",
    long_about = "Fetches Go Outdoors product pages by identifier (e.g. waterproof-down-jacket-123456) and extracts the price and title."
)]
struct Cli {
    /// Site base URL
    #[arg(long, global = true, env = "GOOUTDOORS_BASE_URL")]
    base_url: Option<String>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "GOOUTDOORS_PROXY")]
    proxy: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "GOOUTDOORS_TIMEOUT")]
    timeout: Option<u64>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Fetch the page again for every field instead of caching it
    #[arg(long, global = true)]
    no_cache: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up products by identifier
    #[command(alias = "p")]
    Product {
        /// Product identifier(s), e.g. waterproof-down-jacket-123456
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Print the raw HTML of a product page
    Html {
        /// Product identifier
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(base_url) = cli.base_url {
        config.site.base_url = base_url;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_cache {
        config.scraper.cache_document = false;
    }

    match cli.command {
        Commands::Product { ids } => {
            let cmd = ProductCommand::new(config);

            let output = if ids.len() == 1 {
                cmd.execute(&ids[0]).await?
            } else {
                cmd.execute_batch(&ids).await?
            };

            println!("{}", output);
        }

        Commands::Html { id } => {
            let cmd = HtmlCommand::new(config);
            println!("{}", cmd.execute(&id).await?);
        }
    }

    Ok(())
}
