//! Statistics derived from a crawl result
//!
//! This module provides functionality for summarising a `CrawlResult` and
//! displaying the figures on stdout.

use crate::model::{CrawlResult, PageType};
use std::collections::BTreeMap;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlStatistics {
    /// Number of pages recorded
    pub total_pages: usize,

    /// Count of pages by type
    pub pages_by_type: BTreeMap<PageType, usize>,

    pub total_products: usize,
    pub total_collections: usize,

    /// Image references across all pages
    pub total_images: usize,

    /// Link references across all pages
    pub total_links: usize,

    /// Number of URLs that failed to load
    pub total_errors: usize,
}

impl CrawlStatistics {
    /// Computes statistics for a finished crawl
    pub fn from_result(result: &CrawlResult) -> Self {
        let mut pages_by_type = BTreeMap::new();
        for page in &result.pages {
            *pages_by_type.entry(page.page_type).or_insert(0) += 1;
        }

        Self {
            total_pages: result.pages.len(),
            pages_by_type,
            total_products: result.products.len(),
            total_collections: result.collections.len(),
            total_images: result.pages.iter().map(|p| p.images.len()).sum(),
            total_links: result.pages.iter().map(|p| p.links.len()).sum(),
            total_errors: result.errors.len(),
        }
    }

    /// Share of attempted URLs that loaded, in percent
    pub fn success_rate(&self) -> f64 {
        let attempted = self.total_pages + self.total_errors;
        if attempted == 0 {
            return 0.0;
        }
        (self.total_pages as f64 / attempted as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Pages crawled: {}", stats.total_pages);
    println!("  Products found: {}", stats.total_products);
    println!("  Collections found: {}", stats.total_collections);
    println!("  Images referenced: {}", stats.total_images);
    println!("  Links found: {}", stats.total_links);
    println!();

    if !stats.pages_by_type.is_empty() {
        println!("Pages by Type:");
        let mut type_counts: Vec<_> = stats.pages_by_type.iter().collect();
        type_counts.sort_by(|a, b| b.1.cmp(a.1));

        for (page_type, count) in type_counts {
            let percentage = (*count as f64 / stats.total_pages as f64) * 100.0;
            println!("  {}: {} ({:.1}%)", page_type, count, percentage);
        }
        println!();
    }

    println!(
        "Success Rate: {:.1}% ({} loaded, {} failed)",
        stats.success_rate(),
        stats.total_pages,
        stats.total_errors
    );
}
