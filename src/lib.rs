//! Storefront Crawler: a best-effort storefront ingester
//!
//! This crate crawls a single site breadth-first, collecting page metadata,
//! JSON-LD products, collection pages, the storefront platform and the
//! homepage design profile into one `CrawlResult`.

pub mod classify;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod model;
pub mod output;
pub mod robots;
pub mod server;
pub mod url;

use thiserror::Error;

/// Main error type for crawler operations
#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] UrlError),

    #[error("Invalid crawl options: {0}")]
    InvalidOptions(String),

    /// Carries the partial result, with `robots_txt_allowed` cleared
    #[error("Crawling not allowed by robots.txt: {url}")]
    RobotsDenied {
        url: String,
        result: Box<model::CrawlResult>,
    },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for crawler operations
pub type Result<T> = std::result::Result<T, CrawlerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::Crawler;
pub use model::{CrawlOptions, CrawlRequest, CrawlResult, PageType, Platform};
pub use url::{normalize_url, resolve_url};
