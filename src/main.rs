//! Storefront crawler main entry point
//!
//! This is the command-line interface: `serve` runs the HTTP API and
//! `crawl` performs a single crawl from the terminal.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use storefront_crawler::config::{load_config_with_hash, Config};
use storefront_crawler::crawler::crawl;
use storefront_crawler::output::{
    generate_markdown_summary, print_statistics, write_json_result, CrawlStatistics,
};
use storefront_crawler::server::serve;
use storefront_crawler::CrawlOptions;
use tracing_subscriber::EnvFilter;

/// Storefront crawler: ingests a website's pages, products and design
///
/// Crawls a single site breadth-first while respecting robots.txt and a
/// politeness delay, and reports pages, JSON-LD products, collections, the
/// storefront platform and the homepage design profile.
#[derive(Parser, Debug)]
#[command(name = "storefront-crawler")]
#[command(version)]
#[command(about = "A polite storefront crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to listen on, overriding the configuration
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Crawl one site and print statistics
    Crawl {
        /// Root URL of the site
        url: String,

        /// Maximum link depth from the root URL
        #[arg(long)]
        max_depth: Option<u32>,

        /// Maximum number of pages to record
        #[arg(long)]
        max_pages: Option<usize>,

        /// Extract JSON-LD products
        #[arg(long)]
        products: bool,

        /// Record collection pages
        #[arg(long)]
        collections: bool,

        /// Write the full result as JSON to this path
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Write a markdown summary to this path
        #[arg(long, value_name = "PATH")]
        summary: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_configuration(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { bind } => {
            let bind_address = bind.unwrap_or_else(|| config.server.bind_address.clone());
            serve(config, &bind_address)
                .await
                .context("Server failed")?;
        }
        Command::Crawl {
            url,
            max_depth,
            max_pages,
            products,
            collections,
            output,
            summary,
        } => {
            let options = CrawlOptions {
                max_depth,
                max_pages,
                include_products: Some(products),
                include_collections: Some(collections),
                ..Default::default()
            };
            handle_crawl(config, &url, &options, output.as_deref(), summary.as_deref()).await?;
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("storefront_crawler=info,warn"),
            1 => EnvFilter::new("storefront_crawler=debug,tower_http=debug,info"),
            2 => EnvFilter::new("storefront_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn load_configuration(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

/// Handles the `crawl` subcommand
async fn handle_crawl(
    config: Config,
    url: &str,
    options: &CrawlOptions,
    output: Option<&Path>,
    summary: Option<&Path>,
) -> anyhow::Result<()> {
    let result = crawl(config, url, options)
        .await
        .with_context(|| format!("Crawl of {} failed", url))?;

    print_statistics(&CrawlStatistics::from_result(&result));

    if let Some(path) = output {
        write_json_result(&result, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("✓ Result written to: {}", path.display());
    }

    if let Some(path) = summary {
        generate_markdown_summary(&result, url, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("✓ Summary exported to: {}", path.display());
    }

    Ok(())
}
