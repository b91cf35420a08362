//! JSON-LD product extraction
//!
//! Every `<script type="application/ld+json">` block is parsed on its own;
//! a malformed block is skipped without affecting the others. Only entries
//! whose `@type` is exactly the string `"Product"` are accepted.

use crate::model::ProductRecord;
use scraper::{Html, Selector};
use serde_json::Value;

const LD_JSON_TYPE: &str = "application/ld+json";
const PRODUCT_TYPE: &str = "Product";

/// Extracts product records from a page's structured data
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `page_url` - URL of the page, recorded as each product's `source_url`
pub fn extract_products(document: &Html, page_url: &str) -> Vec<ProductRecord> {
    let mut products = Vec::new();

    for block in json_ld_blocks(document) {
        let data: Value = match serde_json::from_str(block.trim()) {
            Ok(data) => data,
            Err(e) => {
                tracing::trace!("Skipping malformed JSON-LD block on {}: {}", page_url, e);
                continue;
            }
        };

        let entries = match data {
            Value::Array(items) => items,
            single => vec![single],
        };

        products.extend(
            entries
                .iter()
                .filter(|entry| is_product(entry))
                .map(|entry| product_from_entry(entry, page_url)),
        );
    }

    products
}

/// Returns the raw text of every JSON-LD script block, in document order
fn json_ld_blocks(document: &Html) -> Vec<String> {
    let Ok(script_selector) = Selector::parse("script[type]") else {
        return Vec::new();
    };

    document
        .select(&script_selector)
        .filter(|element| {
            element
                .value()
                .attr("type")
                .is_some_and(|t| t.trim().eq_ignore_ascii_case(LD_JSON_TYPE))
        })
        .map(|element| element.text().collect::<String>())
        .filter(|text| !text.trim().is_empty())
        .collect()
}

/// Strict `@type` check; arrays of types and subtypes are not accepted
fn is_product(entry: &Value) -> bool {
    entry.get("@type").and_then(Value::as_str) == Some(PRODUCT_TYPE)
}

fn product_from_entry(entry: &Value, page_url: &str) -> ProductRecord {
    let offer = first_offer(entry);

    let price = offer
        .and_then(|offer| offer.get("price").or_else(|| offer.get("lowPrice")))
        .and_then(parse_price)
        .unwrap_or(0.0);

    ProductRecord {
        name: string_field(entry, "name").unwrap_or_default(),
        description: string_field(entry, "description").unwrap_or_default(),
        price,
        images: image_list(entry.get("image")),
        source_url: page_url.to_string(),
        sku: scalar_field(entry, "sku"),
        brand: brand_name(entry.get("brand")),
        currency: offer.and_then(|offer| string_field(offer, "priceCurrency")),
    }
}

/// `offers` may be a single object or a list; the first offer is used
fn first_offer(entry: &Value) -> Option<&Value> {
    match entry.get("offers")? {
        Value::Array(offers) => offers.first(),
        offer @ Value::Object(_) => Some(offer),
        _ => None,
    }
}

/// Parses a price given as a JSON number or a numeric string
fn parse_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    price.is_finite().then_some(price)
}

/// Normalizes `image` into a list: a single string becomes a one-element list
fn image_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(url)) => vec![url.clone()],
        Some(Value::Array(items)) => items.iter().filter_map(image_url).collect(),
        Some(object @ Value::Object(_)) => image_url(object).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// An image entry is either a URL string or an `ImageObject` with `url`
fn image_url(value: &Value) -> Option<String> {
    match value {
        Value::String(url) => Some(url.clone()),
        Value::Object(_) => string_field(value, "url"),
        _ => None,
    }
}

fn brand_name(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(name) => Some(name.clone()),
        brand @ Value::Object(_) => string_field(brand, "name"),
        _ => None,
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Strings and numbers both render as text (SKUs are often numeric)
fn scalar_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
