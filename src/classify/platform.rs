use crate::classify::RuleSet;
use crate::model::Platform;
use std::sync::LazyLock;

static PLATFORM_RULES: LazyLock<RuleSet<Platform>> = LazyLock::new(|| {
    RuleSet::new(Platform::Custom)
        .with_substrings(Platform::Shopify, &["Shopify.theme", "cdn.shopify.com"])
        .with_substrings(Platform::Woocommerce, &["woocommerce", "wp-content"])
        .with_substrings(Platform::Bigcommerce, &["bigcommerce"])
        .with_substrings(Platform::Squarespace, &["squarespace"])
});

/// Guesses the storefront engine from raw HTML
///
/// Signatures are case-sensitive substrings checked in order
/// (Shopify, WooCommerce, BigCommerce, Squarespace). A page with no
/// recognisable signature is `Custom`; this never returns `Unknown`.
pub fn detect_platform(html: &str) -> Platform {
    PLATFORM_RULES.classify(html)
}
