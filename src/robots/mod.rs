//! Robots.txt handling module
//!
//! robots.txt is fetched once per crawl from the root origin. A missing file,
//! a non-2xx answer or a network failure all mean "allow everything".

mod parser;

pub use parser::{RobotsRules, MAX_CRAWL_DELAY};

use crate::crawler::Fetcher;
use std::time::Duration;

/// Time allowed for the robots.txt request
pub const ROBOTS_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches robots.txt for an origin
///
/// # Arguments
///
/// * `fetcher` - The crawl's fetcher
/// * `origin` - Serialized origin, e.g. `https://shop.test`
pub async fn fetch_robots(fetcher: &Fetcher, origin: &str) -> RobotsRules {
    let robots_url = format!("{}/robots.txt", origin.trim_end_matches('/'));

    match fetcher.fetch_optional_text(&robots_url, ROBOTS_TIMEOUT).await {
        Some(content) => {
            tracing::debug!("Loaded robots.txt from {}", robots_url);
            RobotsRules::from_content(&content)
        }
        None => RobotsRules::allow_all(),
    }
}
