use crate::config::CrawlerConfig;
use crate::url::{origin_of, parse_root_url};
use crate::CrawlerError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Caller-supplied crawl options, as they arrive on the wire
///
/// Every field is optional; absent fields fall back to the `[crawler]`
/// configuration defaults. Present fields are used verbatim, so
/// `maxDepth: 0` really means depth zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlOptions {
    pub max_depth: Option<u32>,
    pub max_pages: Option<usize>,
    pub include_products: Option<bool>,
    pub include_collections: Option<bool>,
    pub rate_limit_ms: Option<u64>,
    pub respect_robots_txt: Option<bool>,
    pub use_sitemap: Option<bool>,
}

/// A validated, immutable description of one crawl
#[derive(Debug, Clone)]
pub struct CrawlRequest {
    /// Absolute HTTP(S) root URL; its origin bounds the crawl
    pub root_url: Url,

    /// Pages at this depth are fetched but spawn no children
    pub max_depth: u32,

    /// Upper bound on recorded pages, always > 0
    pub max_pages: usize,

    pub include_products: bool,
    pub include_collections: bool,

    /// Pause between consecutive fetches
    pub rate_limit: Duration,

    pub respect_robots_txt: bool,
    pub use_sitemap: bool,
}

impl CrawlRequest {
    /// Builds a request from a raw root URL and wire options
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlRequest)` - Root URL is a valid absolute HTTP(S) URL
    /// * `Err(CrawlerError::InvalidUrl)` - Root URL failed validation
    /// * `Err(CrawlerError::InvalidOptions)` - `maxPages` was zero
    pub fn new(
        root_url: &str,
        options: &CrawlOptions,
        defaults: &CrawlerConfig,
    ) -> Result<Self, CrawlerError> {
        let root_url = parse_root_url(root_url)?;

        let max_pages = options.max_pages.unwrap_or(defaults.max_pages);
        if max_pages == 0 {
            return Err(CrawlerError::InvalidOptions(
                "maxPages must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            root_url,
            max_depth: options.max_depth.unwrap_or(defaults.max_depth),
            max_pages,
            include_products: options.include_products.unwrap_or(false),
            include_collections: options.include_collections.unwrap_or(false),
            rate_limit: Duration::from_millis(
                options.rate_limit_ms.unwrap_or(defaults.rate_limit_ms),
            ),
            respect_robots_txt: options
                .respect_robots_txt
                .unwrap_or(defaults.respect_robots_txt),
            use_sitemap: options.use_sitemap.unwrap_or(defaults.use_sitemap),
        })
    }

    /// Builds a request using only configuration defaults
    pub fn with_defaults(root_url: &str, defaults: &CrawlerConfig) -> Result<Self, CrawlerError> {
        Self::new(root_url, &CrawlOptions::default(), defaults)
    }

    /// The serialized origin of the root URL
    pub fn origin(&self) -> String {
        origin_of(&self.root_url)
    }
}
