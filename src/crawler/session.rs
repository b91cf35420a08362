//! One crawl, from root URL to aggregated result
//!
//! A session owns its frontier and its result; nothing is shared with other
//! crawls except the fetcher. Page processing is synchronous: the parsed
//! document never lives across an `.await`.

use crate::classify::detect_platform;
use crate::crawler::frontier::{Frontier, FrontierEntry};
use crate::crawler::parser::parse_document;
use crate::crawler::sitemap::fetch_sitemap;
use crate::crawler::Fetcher;
use crate::extract::{extract_collection, extract_design, extract_products};
use crate::model::{CrawlRequest, CrawlResult, Platform};
use crate::robots::{fetch_robots, RobotsRules};
use crate::url::is_same_origin;
use crate::CrawlerError;
use scraper::Html;
use std::time::{Duration, Instant};

/// Number of sitemap URLs echoed back in the result
const SITEMAP_REPORT_LIMIT: usize = 20;

/// State of a single crawl
pub struct CrawlSession<'a> {
    request: CrawlRequest,
    fetcher: &'a Fetcher,
    agent: &'a str,
    origin: String,
    frontier: Frontier,
    robots: RobotsRules,
    delay: Duration,
    result: CrawlResult,
    fetched_any: bool,
}

impl<'a> CrawlSession<'a> {
    /// Creates a session with the root URL queued at depth 0
    ///
    /// # Arguments
    ///
    /// * `request` - The validated crawl request
    /// * `fetcher` - Fetcher used for every request of this crawl
    /// * `agent` - Product token matched against robots.txt groups
    pub fn new(request: CrawlRequest, fetcher: &'a Fetcher, agent: &'a str) -> Self {
        let origin = request.origin();
        let frontier = Frontier::new(request.root_url.as_str());
        let delay = request.rate_limit;

        Self {
            request,
            fetcher,
            agent,
            origin,
            frontier,
            robots: RobotsRules::allow_all(),
            delay,
            result: CrawlResult::default(),
            fetched_any: false,
        }
    }

    /// Runs the traversal loop to completion
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlResult)` - Best-effort result; per-URL failures are in `errors`
    /// * `Err(CrawlerError::RobotsDenied)` - robots.txt forbids the root URL
    pub async fn run(mut self) -> Result<CrawlResult, CrawlerError> {
        let start_time = Instant::now();
        tracing::info!(
            "Starting crawl of {} (max depth {}, max pages {})",
            self.request.root_url,
            self.request.max_depth,
            self.request.max_pages
        );

        if self.request.respect_robots_txt {
            self.load_robots().await?;
        }

        if self.request.use_sitemap {
            self.seed_from_sitemap().await;
        }

        while self.result.pages.len() < self.request.max_pages {
            let Some(entry) = self.frontier.pop() else {
                tracing::debug!("Frontier is empty");
                break;
            };

            if entry.depth > self.request.max_depth || self.frontier.is_visited(&entry.url) {
                tracing::trace!("Skipping {} (depth {})", entry.url, entry.depth);
                continue;
            }

            self.frontier.mark_visited(&entry.url);

            if self.request.respect_robots_txt && !self.robots.is_allowed(&entry.url, self.agent)
            {
                tracing::debug!("Skipping {}: disallowed by robots.txt", entry.url);
                continue;
            }

            if self.fetched_any && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.fetched_any = true;

            tracing::debug!("Fetching {} (depth {})", entry.url, entry.depth);
            match self.fetcher.fetch_html(&entry.url).await {
                Ok(html) => self.process_page(&entry, &html),
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", entry.url, e);
                    self.result
                        .errors
                        .push(format!("Failed to load {}: {}", entry.url, e));
                }
            }
        }

        self.result.deduplicate();

        tracing::info!(
            "Crawl of {} complete in {:.2}s: {} pages, {} products, {} collections, {} errors",
            self.request.root_url,
            start_time.elapsed().as_secs_f64(),
            self.result.pages.len(),
            self.result.products.len(),
            self.result.collections.len(),
            self.result.errors.len()
        );

        Ok(self.result)
    }

    async fn load_robots(&mut self) -> Result<(), CrawlerError> {
        self.robots = fetch_robots(self.fetcher, &self.origin).await;

        if !self.robots.is_allowed(self.request.root_url.as_str(), self.agent) {
            tracing::warn!("robots.txt disallows {}", self.request.root_url);
            self.result.robots_txt_allowed = false;
            return Err(CrawlerError::RobotsDenied {
                url: self.request.root_url.to_string(),
                result: Box::new(std::mem::take(&mut self.result)),
            });
        }

        if let Some(crawl_delay) = self.robots.crawl_delay(self.agent) {
            tracing::info!("Using crawl-delay from robots.txt: {:?}", crawl_delay);
            self.delay = crawl_delay;
        }

        Ok(())
    }

    async fn seed_from_sitemap(&mut self) {
        let sitemap_urls = fetch_sitemap(self.fetcher, &self.request.root_url).await;

        self.result.sitemap_urls = sitemap_urls
            .iter()
            .take(SITEMAP_REPORT_LIMIT)
            .cloned()
            .collect();

        for url in sitemap_urls.into_iter().take(self.request.max_pages) {
            self.frontier.push(url, 1);
        }
    }

    /// Records a fetched page and queues its same-origin links
    fn process_page(&mut self, entry: &FrontierEntry, html: &str) {
        let document = Html::parse_document(html);
        let parsed = parse_document(&document, &self.origin);

        if self.result.platform == Platform::Unknown {
            self.result.platform = detect_platform(html);
            tracing::debug!("Detected platform: {}", self.result.platform);
        }

        if self.request.include_products {
            self.result
                .products
                .extend(extract_products(&document, &entry.url));
        }

        if self.request.include_collections {
            if let Some(collection) = extract_collection(&entry.url, &parsed.headings) {
                self.result.collections.push(collection);
            }
        }

        if entry.depth == 0 {
            self.result.design = extract_design(&document, &self.origin);
        }

        if entry.depth < self.request.max_depth {
            for link in &parsed.links {
                if is_same_origin(link, &self.request.root_url) && !self.frontier.is_visited(link) {
                    self.frontier.push(link.clone(), entry.depth + 1);
                }
            }
        }

        self.result.pages.push(parsed.into_record(&entry.url));
    }
}
