use crate::classify::is_collection_path;
use crate::model::CollectionRecord;
use crate::url::lowercase_path;

/// Builds a collection record for a collection page
///
/// Returns `None` unless the URL path matches the collection heuristics and
/// the page has a non-empty first heading. `product_count` is left at 0.
///
/// # Arguments
///
/// * `page_url` - URL of the page
/// * `headings` - The page's `<h1>` texts in document order
pub fn extract_collection(page_url: &str, headings: &[String]) -> Option<CollectionRecord> {
    let path = lowercase_path(page_url)?;
    if !is_collection_path(&path) {
        return None;
    }

    let name = headings.first()?.trim();
    if name.is_empty() {
        return None;
    }

    Some(CollectionRecord {
        name: name.to_string(),
        url: page_url.to_string(),
        product_count: 0,
    })
}
