//! Visual design extraction from the root page
//!
//! Colours and fonts come from the text of inline `<style>` blocks only;
//! external stylesheets are never fetched. The logo and navigation come
//! from the document tree.

use crate::crawler::element_text;
use crate::model::{ColorPalette, DesignProfile, FontSet, NavLink, Navigation};
use crate::url::resolve_url;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

const MAX_PRIMARY_COLORS: usize = 5;
const MAX_SECONDARY_COLORS: usize = 5;
const MAX_FONTS: usize = 3;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{6}").expect("valid hex colour regex"));

static CUSTOM_PROPERTY_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--[A-Za-z0-9_-]+\s*:\s*(#[0-9a-fA-F]{6}\b|#[0-9a-fA-F]{3}\b|rgba?\([^)]*\))")
        .expect("valid custom property regex")
});

static CSS_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^{}]+)\{([^{}]*)\}").expect("valid css rule regex"));

static FONT_FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)font-family\s*:\s*([^;}]+)").expect("valid font-family regex")
});

static HEADING_SELECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|[^a-z0-9_-])h[1-6]\b").expect("valid heading regex"));

/// Builds the design profile for a page
///
/// # Arguments
///
/// * `document` - The parsed root page
/// * `origin` - Origin used to resolve the logo and navigation links
pub fn extract_design(document: &Html, origin: &str) -> DesignProfile {
    let styles = style_blocks(document);

    DesignProfile {
        colors: ColorPalette {
            primary: primary_colors(&styles),
            secondary: secondary_colors(&styles),
            ..ColorPalette::default()
        },
        fonts: extract_fonts(&styles),
        logo: extract_logo(document, origin),
        navigation: Navigation {
            header: extract_navigation(document, origin),
            footer: Vec::new(),
        },
    }
}

fn style_blocks(document: &Html) -> Vec<String> {
    let Ok(style_selector) = Selector::parse("style") else {
        return Vec::new();
    };

    document
        .select(&style_selector)
        .map(|element| element.text().collect::<String>())
        .collect()
}

/// Pushes `value` unless already present or the list is full
fn push_unique(list: &mut Vec<String>, value: String, limit: usize) {
    if list.len() < limit && !list.contains(&value) {
        list.push(value);
    }
}

/// First unique six-digit hex colours across all style blocks
fn primary_colors(styles: &[String]) -> Vec<String> {
    let mut colors = Vec::new();

    for style in styles {
        for found in HEX_COLOR.find_iter(style) {
            push_unique(&mut colors, found.as_str().to_string(), MAX_PRIMARY_COLORS);
        }
    }

    colors
}

/// Colour values assigned to CSS custom properties (`--brand: #123456`)
fn secondary_colors(styles: &[String]) -> Vec<String> {
    let mut colors = Vec::new();

    for style in styles {
        for caps in CUSTOM_PROPERTY_COLOR.captures_iter(style) {
            if let Some(value) = caps.get(1) {
                push_unique(&mut colors, value.as_str().trim().to_string(), MAX_SECONDARY_COLORS);
            }
        }
    }

    colors
}

/// Font families split by whether the rule's selector targets a heading
fn extract_fonts(styles: &[String]) -> FontSet {
    let mut fonts = FontSet::default();

    for style in styles {
        for rule in CSS_RULE.captures_iter(style) {
            let (Some(selector), Some(body)) = (rule.get(1), rule.get(2)) else {
                continue;
            };

            let Some(family) = FONT_FAMILY
                .captures(body.as_str())
                .and_then(|caps| caps.get(1))
                .and_then(|value| primary_family(value.as_str()))
            else {
                continue;
            };

            let selector = selector.as_str().trim();
            if selector.starts_with('@') {
                continue;
            }

            if HEADING_SELECTOR.is_match(selector) {
                push_unique(&mut fonts.headings, family, MAX_FONTS);
            } else {
                push_unique(&mut fonts.body, family, MAX_FONTS);
            }
        }
    }

    fonts
}

/// First family of a `font-family` value with quotes stripped
///
/// CSS-wide keywords and `var(...)` references are not font names.
fn primary_family(value: &str) -> Option<String> {
    let first = value
        .split(',')
        .next()?
        .trim()
        .trim_end_matches("!important")
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();

    let keyword = first.to_ascii_lowercase();
    if first.is_empty()
        || keyword.starts_with("var(")
        || matches!(keyword.as_str(), "inherit" | "initial" | "unset" | "revert")
    {
        return None;
    }

    Some(first.to_string())
}

/// `src` of the first `<img>` whose class mentions "logo"
fn extract_logo(document: &Html, origin: &str) -> Option<String> {
    let img_selector = Selector::parse("img[class][src]").ok()?;

    document
        .select(&img_selector)
        .find(|element| {
            element
                .value()
                .attr("class")
                .is_some_and(|class| class.to_ascii_lowercase().contains("logo"))
        })
        .and_then(|element| element.value().attr("src"))
        .and_then(|src| resolve_url(src, origin))
}

/// Every titled, resolvable link inside a `<nav>`
fn extract_navigation(document: &Html, origin: &str) -> Vec<NavLink> {
    let Ok(nav_link_selector) = Selector::parse("nav a[href]") else {
        return Vec::new();
    };

    document
        .select(&nav_link_selector)
        .filter_map(|element| {
            let title = element_text(&element);
            if title.is_empty() {
                return None;
            }

            let url = element
                .value()
                .attr("href")
                .and_then(|href| resolve_url(href, origin))?;

            Some(NavLink { title, url })
        })
        .collect()
}
