//! URL handling module
//!
//! This module provides root URL validation, origin comparison, candidate
//! resolution for `src`/`href` attributes, and the normalization used as the
//! crawl's visited-set key.

mod normalize;
mod origin;
mod resolve;

// Re-export main functions
pub use normalize::normalize_url;
pub use origin::{is_same_origin, lowercase_path, origin_of, parse_root_url};
pub use resolve::resolve_url;

/// Returns the visited-set key for a URL
///
/// Falls back to the raw string when the URL cannot be normalized, so a
/// malformed entry is still deduplicated against itself.
pub fn visit_key(url_str: &str) -> String {
    normalize_url(url_str)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| url_str.to_string())
}
