//! sitemap.xml discovery
//!
//! Only the flat `<loc>` entries of `{origin}/sitemap.xml` are read; sitemap
//! indexes are not followed.

use crate::crawler::Fetcher;
use crate::url::{is_same_origin, origin_of};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

/// Time allowed for the sitemap request
pub const SITEMAP_TIMEOUT: Duration = Duration::from_secs(5);

static LOC_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<loc>([^<]+)</loc>").expect("valid loc regex"));

/// Extracts every `<loc>` value with the same origin as `root`
///
/// Scheme, host and port must all match; a host that merely starts with the
/// root's host is foreign.
pub fn parse_sitemap(xml: &str, root: &Url) -> Vec<String> {
    LOC_ENTRY
        .captures_iter(xml)
        .filter_map(|caps| caps.get(1))
        .map(|loc| loc.as_str().trim().to_string())
        .filter(|loc| is_same_origin(loc, root))
        .collect()
}

/// Fetches and parses the root origin's sitemap; empty on any failure
pub async fn fetch_sitemap(fetcher: &Fetcher, root: &Url) -> Vec<String> {
    let sitemap_url = format!("{}/sitemap.xml", origin_of(root));

    let Some(xml) = fetcher.fetch_optional_text(&sitemap_url, SITEMAP_TIMEOUT).await else {
        return Vec::new();
    };

    let urls = parse_sitemap(&xml, root);
    tracing::debug!("Found {} URLs in {}", urls.len(), sitemap_url);
    urls
}
