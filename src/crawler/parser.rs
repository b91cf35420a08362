//! HTML parser for page metadata and outbound references
//!
//! This module extracts from a parsed document:
//! - Title and meta description
//! - `<h1>` headings in document order
//! - Image sources and link targets, resolved against the page origin
//!
//! Parsing goes through html5ever's tree builder (via `scraper`), which
//! recovers from unclosed tags and odd quoting instead of failing.

use crate::classify::classify_page_url;
use crate::model::PageRecord;
use crate::url::resolve_url;
use scraper::{ElementRef, Html, Selector};

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPage {
    /// First `<title>` text, empty when absent
    pub title: String,

    /// `<meta name="description">` content, empty when absent
    pub description: String,

    /// Text of every `<h1>`, in document order
    pub headings: Vec<String>,

    /// Absolute image URLs
    pub images: Vec<String>,

    /// Absolute link URLs (fragment-only links excluded)
    pub links: Vec<String>,
}

/// Parses HTML content and extracts page metadata
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `origin` - Origin of the page, used to resolve root-relative references
///
/// # Example
///
/// ```
/// use storefront_crawler::crawler::parse_html;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let parsed = parse_html(html, "https://example.com");
/// assert_eq!(parsed.title, "Test");
/// assert_eq!(parsed.links, vec!["https://example.com/page".to_string()]);
/// ```
pub fn parse_html(html: &str, origin: &str) -> ParsedPage {
    let document = Html::parse_document(html);
    parse_document(&document, origin)
}

/// Extracts page metadata from an already parsed document
pub fn parse_document(document: &Html, origin: &str) -> ParsedPage {
    ParsedPage {
        title: extract_title(document),
        description: extract_description(document),
        headings: extract_headings(document),
        images: extract_images(document, origin),
        links: extract_links(document, origin),
    }
}

impl ParsedPage {
    /// Turns the parsed fields into a page record for `url`
    pub fn into_record(self, url: &str) -> PageRecord {
        PageRecord {
            url: url.to_string(),
            title: self.title,
            description: self.description,
            headings: self.headings,
            images: self.images,
            links: self.links,
            page_type: classify_page_url(url),
        }
    }
}

/// Collects an element's text with whitespace runs collapsed to single spaces
pub fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .flat_map(|text| text.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> String {
    let Ok(title_selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&title_selector)
        .next()
        .map(|element| element_text(&element))
        .unwrap_or_default()
}

/// Extracts the first `<meta name="description">` content
fn extract_description(document: &Html) -> String {
    let Ok(meta_selector) = Selector::parse("meta[name]") else {
        return String::new();
    };

    document
        .select(&meta_selector)
        .find(|element| {
            element
                .value()
                .attr("name")
                .is_some_and(|name| name.trim().eq_ignore_ascii_case("description"))
        })
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// Extracts every `<h1>` text, trimmed but otherwise verbatim
fn extract_headings(document: &Html) -> Vec<String> {
    let mut headings = Vec::new();

    if let Ok(h1_selector) = Selector::parse("h1") {
        for element in document.select(&h1_selector) {
            let text: String = element.text().collect();
            headings.push(text.trim().to_string());
        }
    }

    headings
}

/// Extracts every resolvable `<img src>`
fn extract_images(document: &Html, origin: &str) -> Vec<String> {
    let mut images = Vec::new();

    if let Ok(img_selector) = Selector::parse("img[src]") {
        for element in document.select(&img_selector) {
            if let Some(absolute_url) = element
                .value()
                .attr("src")
                .and_then(|src| resolve_url(src, origin))
            {
                images.push(absolute_url);
            }
        }
    }

    images
}

/// Extracts every resolvable `<a href>`, skipping in-page fragment links
fn extract_links(document: &Html, origin: &str) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            // Skip fragment-only links (same page anchors)
            if href.trim_start().starts_with('#') {
                continue;
            }

            if let Some(absolute_url) = resolve_url(href, origin) {
                links.push(absolute_url);
            }
        }
    }

    links
}
