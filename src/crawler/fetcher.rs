//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the crawler's user agent
//! - GET requests for page HTML, one attempt each
//! - Optional fetches of auxiliary text (robots.txt, sitemap.xml)
//! - Error classification into status and network failures

use crate::config::UserAgentConfig;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Why a page could not be fetched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// Connection, TLS, timeout or body read failure
    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Network("Request timeout".to_string())
        } else if e.is_connect() {
            FetchError::Network("Connection refused".to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Total time allowed per request
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use storefront_crawler::config::UserAgentConfig;
/// use storefront_crawler::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Page fetcher shared by every step of a crawl
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher with its own client
    pub fn new(config: &UserAgentConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config, timeout)?,
        })
    }

    /// Fetches a page body as text
    ///
    /// Redirects are followed by the client. Any final status outside
    /// 200..=299 is an error; there are no retries.
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches an auxiliary text resource with its own timeout
    ///
    /// Returns `None` on any failure, including non-2xx statuses.
    pub async fn fetch_optional_text(&self, url: &str, timeout: Duration) -> Option<String> {
        let response = match self.client.get(url).timeout(timeout).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Could not fetch {}: {}", url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Skipping {}: HTTP {}", url, response.status().as_u16());
            return None;
        }

        response.text().await.ok()
    }
}
