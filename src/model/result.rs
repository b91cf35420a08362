use crate::model::design::DesignProfile;
use crate::model::records::{CollectionRecord, PageRecord, Platform, ProductRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Everything gathered by one crawl
///
/// Built incrementally by a single crawl session and handed back once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    pub pages: Vec<PageRecord>,
    pub products: Vec<ProductRecord>,
    pub collections: Vec<CollectionRecord>,
    pub design: DesignProfile,
    pub platform: Platform,
    /// One entry per URL that failed to fetch
    pub errors: Vec<String>,
    pub robots_txt_allowed: bool,
    pub sitemap_urls: Vec<String>,
}

impl Default for CrawlResult {
    fn default() -> Self {
        Self {
            pages: Vec::new(),
            products: Vec::new(),
            collections: Vec::new(),
            design: DesignProfile::default(),
            platform: Platform::Unknown,
            errors: Vec::new(),
            robots_txt_allowed: true,
            sitemap_urls: Vec::new(),
        }
    }
}

impl CrawlResult {
    /// Drops repeated products (by name and source URL) and collections (by URL)
    ///
    /// The first occurrence is kept, so discovery order is preserved.
    pub fn deduplicate(&mut self) {
        let mut seen_products = HashSet::new();
        self.products
            .retain(|p| seen_products.insert((p.name.clone(), p.source_url.clone())));

        let mut seen_collections = HashSet::new();
        self.collections
            .retain(|c| seen_collections.insert(c.url.clone()));
    }
}
