use storefront_crawler::config::{Config, CrawlerConfig, ServerConfig, UserAgentConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration: short timeout, no politeness delay
pub fn create_test_config() -> Config {
    Config {
        crawler: CrawlerConfig {
            max_depth: 3,
            max_pages: 50,
            request_timeout_secs: 1,
            rate_limit_ms: 0,
            respect_robots_txt: true,
            use_sitemap: true,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: "https://example.com/bot".to_string(),
        },
        server: ServerConfig::default(),
    }
}

/// Wraps a body fragment in a minimal HTML document
pub fn html_page(title: &str, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!(
            "<html><head><title>{}</title></head><body>{}</body></html>",
            title, body
        ))
        .insert_header("content-type", "text/html")
}

/// Mounts a GET mock serving `response` at `route`
pub async fn mount_page(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Mounts a GET mock that must be hit exactly `times` times
pub async fn mount_page_expecting(
    server: &MockServer,
    route: &str,
    response: ResponseTemplate,
    times: u64,
) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

/// Mounts a robots.txt body
pub async fn mount_robots(server: &MockServer, content: &str) {
    mount_page(
        server,
        "/robots.txt",
        ResponseTemplate::new(200).set_body_string(content),
    )
    .await;
}
