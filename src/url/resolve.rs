/// Resolves a candidate `src`/`href` value against a page origin
///
/// # Resolution Rules
///
/// | Candidate | Result |
/// |-----------|--------|
/// | `http://...`, `https://...` | unchanged |
/// | `//host/path` (protocol-relative) | `https:` prefixed |
/// | `/path` (root-relative) | origin prefixed |
/// | anything else (bare relative, empty, `mailto:`...) | `None` |
///
/// # Arguments
///
/// * `candidate` - The raw attribute value
/// * `origin` - The serialized origin of the page, e.g. `https://example.com`
///
/// # Examples
///
/// ```
/// use storefront_crawler::url::resolve_url;
///
/// assert_eq!(
///     resolve_url("/foo", "https://example.com"),
///     Some("https://example.com/foo".to_string())
/// );
/// assert_eq!(resolve_url("foo.html", "https://example.com"), None);
/// ```
pub fn resolve_url(candidate: &str, origin: &str) -> Option<String> {
    let candidate = candidate.trim();

    if candidate.is_empty() {
        return None;
    }

    if candidate.starts_with("http://") || candidate.starts_with("https://") {
        return Some(candidate.to_string());
    }

    if candidate.starts_with("//") {
        return Some(format!("https:{}", candidate));
    }

    if candidate.starts_with('/') {
        return Some(format!("{}{}", origin.trim_end_matches('/'), candidate));
    }

    None
}
