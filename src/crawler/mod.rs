//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a single attempt per URL
//! - HTML parsing and link extraction
//! - The FIFO frontier and visited set
//! - robots.txt and sitemap handling around the traversal loop

mod fetcher;
mod frontier;
mod parser;
mod session;
mod sitemap;

pub use fetcher::{build_http_client, FetchError, Fetcher};
pub use frontier::{Frontier, FrontierEntry};
pub use parser::{element_text, parse_document, parse_html, ParsedPage};
pub use session::CrawlSession;
pub use sitemap::{fetch_sitemap, parse_sitemap};

use crate::config::Config;
use crate::model::{CrawlOptions, CrawlRequest, CrawlResult};
use crate::CrawlerError;
use std::sync::Arc;
use std::time::Duration;

/// Entry point for running crawls with one configuration
///
/// Cheap to clone; clones share the configuration and the HTTP client.
#[derive(Debug, Clone)]
pub struct Crawler {
    config: Arc<Config>,
    fetcher: Fetcher,
}

impl Crawler {
    /// Creates a crawler, building its HTTP client from the configuration
    pub fn new(config: Config) -> Result<Self, CrawlerError> {
        let fetcher = Fetcher::new(
            &config.user_agent,
            Duration::from_secs(config.crawler.request_timeout_secs),
        )?;

        Ok(Self {
            config: Arc::new(config),
            fetcher,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validates a root URL and options against this crawler's defaults
    pub fn request(
        &self,
        root_url: &str,
        options: &CrawlOptions,
    ) -> Result<CrawlRequest, CrawlerError> {
        CrawlRequest::new(root_url, options, &self.config.crawler)
    }

    /// Runs one crawl to completion
    pub async fn crawl(&self, request: CrawlRequest) -> Result<CrawlResult, CrawlerError> {
        CrawlSession::new(request, &self.fetcher, &self.config.user_agent.crawler_name)
            .run()
            .await
    }
}

/// Runs a complete crawl operation
///
/// This is the one-shot entry point used by the command line. It will:
/// 1. Validate the root URL and options
/// 2. Build the HTTP client
/// 3. Consult robots.txt and the sitemap
/// 4. Traverse the site and extract content
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `root_url` - Where the crawl starts
/// * `options` - Per-crawl overrides of the configuration defaults
pub async fn crawl(
    config: Config,
    root_url: &str,
    options: &CrawlOptions,
) -> Result<CrawlResult, CrawlerError> {
    let crawler = Crawler::new(config)?;
    let request = crawler.request(root_url, options)?;
    crawler.crawl(request).await
}
