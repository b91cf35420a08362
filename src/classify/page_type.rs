use crate::classify::RuleSet;
use crate::model::PageType;
use crate::url::lowercase_path;
use std::sync::LazyLock;

const PRODUCT_MARKERS: &[&str] = &["/products/", "/product/"];
const COLLECTION_MARKERS: &[&str] = &["/collections/", "/collection/", "/category/"];

static PAGE_TYPE_RULES: LazyLock<RuleSet<PageType>> = LazyLock::new(|| {
    RuleSet::new(PageType::Page)
        .with_substrings(PageType::Product, PRODUCT_MARKERS)
        .with_substrings(PageType::Collection, COLLECTION_MARKERS)
        .with_rule(PageType::Home, |path| path.is_empty() || path == "/")
});

/// Classifies a URL path (case-insensitive)
///
/// Rules, first match wins:
/// 1. `/products/`, `/product/` → `Product`
/// 2. `/collections/`, `/collection/`, `/category/` → `Collection`
/// 3. empty or `/` → `Home`
/// 4. otherwise `Page`
pub fn classify_path(path: &str) -> PageType {
    PAGE_TYPE_RULES.classify(&path.to_lowercase())
}

/// Classifies a full page URL by its path; unparseable URLs are plain pages
pub fn classify_page_url(url: &str) -> PageType {
    match lowercase_path(url) {
        Some(path) => classify_path(&path),
        None => PageType::Page,
    }
}

/// Checks whether a path matches the collection heuristics
pub fn is_collection_path(path: &str) -> bool {
    let path = path.to_lowercase();
    COLLECTION_MARKERS.iter().any(|marker| path.contains(marker))
}
