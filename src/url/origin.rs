use crate::UrlError;
use url::Url;

/// Parses a crawl root URL
///
/// The root must be an absolute HTTP(S) URL with a host; anything else is
/// rejected before the crawl touches the network.
///
/// # Examples
///
/// ```
/// use storefront_crawler::url::parse_root_url;
///
/// assert!(parse_root_url("https://shop.test/").is_ok());
/// assert!(parse_root_url("shop.test").is_err());
/// assert!(parse_root_url("ftp://shop.test/").is_err());
/// ```
pub fn parse_root_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}

/// Returns the serialized origin (scheme + host + port) of a URL
///
/// Default ports are omitted, e.g. `https://example.com`.
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Checks whether `candidate` parses to a URL with the same origin as `root`
pub fn is_same_origin(candidate: &str, root: &Url) -> bool {
    match Url::parse(candidate) {
        Ok(url) => url.origin() == root.origin(),
        Err(_) => false,
    }
}

/// Returns the lowercased path of a URL string, or `None` if it does not parse
pub fn lowercase_path(url_str: &str) -> Option<String> {
    Url::parse(url_str).ok().map(|url| url.path().to_lowercase())
}
