use crate::support::{
    create_test_config, html_page, mount_page, mount_page_expecting, mount_robots,
};
use std::time::{Duration, Instant};
use storefront_crawler::crawler::{crawl, Crawler};
use storefront_crawler::{CrawlOptions, CrawlerError, PageType, Platform};
use wiremock::{MockServer, ResponseTemplate};

fn urls(result: &storefront_crawler::CrawlResult) -> Vec<String> {
    result.pages.iter().map(|p| p.url.clone()).collect()
}

#[tokio::test]
async fn test_full_crawl_is_breadth_first() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page("Home", r#"<a href="/a">A</a> <a href="/b">B</a>"#),
    )
    .await;
    mount_page(&mock_server, "/a", html_page("A", r#"<a href="/c">C</a>"#)).await;
    mount_page(&mock_server, "/b", html_page("B", "Leaf")).await;
    mount_page(&mock_server, "/c", html_page("C", "Leaf")).await;

    let result = crawl(
        create_test_config(),
        &format!("{}/", base_url),
        &CrawlOptions::default(),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(
        urls(&result),
        vec![
            format!("{}/", base_url),
            format!("{}/a", base_url),
            format!("{}/b", base_url),
            format!("{}/c", base_url),
        ]
    );
    assert_eq!(result.pages[0].title, "Home");
    assert_eq!(result.pages[0].page_type, PageType::Home);
    assert!(result.errors.is_empty());
    assert!(result.robots_txt_allowed);
}

#[tokio::test]
async fn test_max_pages_limit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let links: String = (1..=5)
        .map(|i| format!(r#"<a href="/p{}">P{}</a>"#, i, i))
        .collect();
    mount_page(&mock_server, "/", html_page("Home", &links)).await;
    for i in 1..=5 {
        mount_page(&mock_server, &format!("/p{}", i), html_page("P", "")).await;
    }

    let options = CrawlOptions {
        max_pages: Some(3),
        ..Default::default()
    };
    let result = crawl(create_test_config(), &format!("{}/", base_url), &options)
        .await
        .expect("Crawl failed");

    assert_eq!(
        urls(&result),
        vec![
            format!("{}/", base_url),
            format!("{}/p1", base_url),
            format!("{}/p2", base_url),
        ]
    );
}

#[tokio::test]
async fn test_max_depth_zero_fetches_only_root() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page("Home", r#"<a href="/a">A</a>"#),
    )
    .await;
    mount_page_expecting(&mock_server, "/a", html_page("A", ""), 0).await;

    let options = CrawlOptions {
        max_depth: Some(0),
        ..Default::default()
    };
    let result = crawl(create_test_config(), &format!("{}/", base_url), &options)
        .await
        .expect("Crawl failed");

    assert_eq!(result.pages.len(), 1);
    assert_eq!(
        result.pages[0].links,
        vec![format!("{}/a", base_url)]
    );
}

#[tokio::test]
async fn test_pages_at_max_depth_spawn_no_children() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html_page("Home", r#"<a href="/a">A</a>"#)).await;
    mount_page(&mock_server, "/a", html_page("A", r#"<a href="/b">B</a>"#)).await;
    mount_page_expecting(&mock_server, "/b", html_page("B", ""), 0).await;

    let options = CrawlOptions {
        max_depth: Some(1),
        ..Default::default()
    };
    let result = crawl(create_test_config(), &format!("{}/", base_url), &options)
        .await
        .expect("Crawl failed");

    assert_eq!(result.pages.len(), 2);
}

#[tokio::test]
async fn test_duplicate_links_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page_expecting(
        &mock_server,
        "/",
        html_page(
            "Home",
            r#"<a href="/a">A</a><a href="/a">Again</a><a href="/a/">Slash</a><a href="/a#reviews">Anchor</a>"#,
        ),
        1,
    )
    .await;
    mount_page_expecting(
        &mock_server,
        "/a",
        html_page("A", r#"<a href="/">Home</a><a href="/a">Self</a>"#),
        1,
    )
    .await;

    let result = crawl(
        create_test_config(),
        &format!("{}/", base_url),
        &CrawlOptions::default(),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(result.pages.len(), 2);
}

#[tokio::test]
async fn test_fetch_failure_recorded_and_crawl_continues() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page("Home", r#"<a href="/missing">Gone</a><a href="/ok">Ok</a>"#),
    )
    .await;
    mount_page(&mock_server, "/missing", ResponseTemplate::new(404)).await;
    mount_page(&mock_server, "/ok", html_page("Ok", "")).await;

    let result = crawl(
        create_test_config(),
        &format!("{}/", base_url),
        &CrawlOptions::default(),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(
        urls(&result),
        vec![format!("{}/", base_url), format!("{}/ok", base_url)]
    );
    assert_eq!(
        result.errors,
        vec![format!("Failed to load {}/missing: HTTP 404", base_url)]
    );
}

#[tokio::test]
async fn test_timeout_recorded_and_crawl_continues() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page("Home", r#"<a href="/slow">Slow</a><a href="/fast">Fast</a>"#),
    )
    .await;
    mount_page(
        &mock_server,
        "/slow",
        html_page("Slow", "").set_delay(Duration::from_secs(3)),
    )
    .await;
    mount_page(&mock_server, "/fast", html_page("Fast", "")).await;

    let result = crawl(
        create_test_config(),
        &format!("{}/", base_url),
        &CrawlOptions::default(),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(result.pages.len(), 2);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with(&format!("Failed to load {}/slow: ", base_url)));
}

#[tokio::test]
async fn test_external_links_not_followed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page(
            "Home",
            r#"<a href="https://elsewhere.invalid/page">Out</a><a href="//cdn.invalid/x">Cdn</a>"#,
        ),
    )
    .await;

    let result = crawl(
        create_test_config(),
        &format!("{}/", base_url),
        &CrawlOptions::default(),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(result.pages.len(), 1);
    assert_eq!(result.pages[0].links.len(), 2);
    assert!(result.errors.is_empty());
}

#[tokio::test]
async fn test_products_and_collections_extracted() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let product_ld = r#"<script type="application/ld+json">{"@type":"Product","name":"Mug","offers":{"price":"12.50","priceCurrency":"USD"}}</script>"#;

    mount_page(
        &mock_server,
        "/",
        html_page(
            "Home",
            r#"<a href="/products/mug">Mug</a><a href="/collections/candles">Candles</a>"#,
        ),
    )
    .await;
    mount_page(
        &mock_server,
        "/products/mug",
        html_page("Mug", &format!("{}{}", product_ld, product_ld)),
    )
    .await;
    mount_page(
        &mock_server,
        "/collections/candles",
        html_page("Candles", "<h1>Category Name</h1>"),
    )
    .await;

    let options = CrawlOptions {
        include_products: Some(true),
        include_collections: Some(true),
        ..Default::default()
    };
    let result = crawl(create_test_config(), &format!("{}/", base_url), &options)
        .await
        .expect("Crawl failed");

    assert_eq!(result.products.len(), 1);
    assert_eq!(result.products[0].name, "Mug");
    assert_eq!(result.products[0].price, 12.5);
    assert_eq!(
        result.products[0].source_url,
        format!("{}/products/mug", base_url)
    );

    assert_eq!(result.collections.len(), 1);
    assert_eq!(result.collections[0].name, "Category Name");
    assert_eq!(
        result.collections[0].url,
        format!("{}/collections/candles", base_url)
    );
    assert_eq!(result.collections[0].product_count, 0);

    assert_eq!(result.pages[1].page_type, PageType::Product);
    assert_eq!(result.pages[2].page_type, PageType::Collection);
}

#[tokio::test]
async fn test_extraction_disabled_by_default() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/collections/candles",
        html_page(
            "Candles",
            r#"<h1>Candles</h1><script type="application/ld+json">{"@type":"Product","name":"Mug"}</script>"#,
        ),
    )
    .await;

    let result = crawl(
        create_test_config(),
        &format!("{}/collections/candles", base_url),
        &CrawlOptions::default(),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(result.pages.len(), 1);
    assert!(result.products.is_empty());
    assert!(result.collections.is_empty());
}

#[tokio::test]
async fn test_platform_and_design_from_root() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page(
            "Home",
            r#"<style>body { color: #112233; font-family: "Inter", sans-serif; }</style>
            <script src="https://cdn.shopify.com/s/theme.js"></script>
            <img class="header-logo" src="/logo.png">
            <nav><a href="/pages/about">About</a></nav>"#,
        ),
    )
    .await;
    mount_page(
        &mock_server,
        "/pages/about",
        html_page("About", "<style>p { color: #ffffff; }</style>"),
    )
    .await;

    let result = crawl(
        create_test_config(),
        &format!("{}/", base_url),
        &CrawlOptions::default(),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(result.platform, Platform::Shopify);
    assert_eq!(result.design.colors.primary, vec!["#112233"]);
    assert_eq!(result.design.fonts.body, vec!["Inter"]);
    assert_eq!(
        result.design.logo,
        Some(format!("{}/logo.png", base_url))
    );
    assert_eq!(result.design.navigation.header.len(), 1);
    assert_eq!(result.design.navigation.header[0].title, "About");
}

#[tokio::test]
async fn test_platform_custom_when_no_signature() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page("Home", r#"<a href="/shop">Shop</a>"#),
    )
    .await;
    mount_page(
        &mock_server,
        "/shop",
        html_page("Shop", r#"<link href="/wp-content/style.css">"#),
    )
    .await;

    let result = crawl(
        create_test_config(),
        &format!("{}/", base_url),
        &CrawlOptions::default(),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(result.platform, Platform::Custom);
}

#[tokio::test]
async fn test_robots_disallowing_root_refuses_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nDisallow: /").await;
    mount_page_expecting(&mock_server, "/", html_page("Home", ""), 0).await;

    let result = crawl(
        create_test_config(),
        &format!("{}/", base_url),
        &CrawlOptions::default(),
    )
    .await;

    match result {
        Err(CrawlerError::RobotsDenied { result, .. }) => {
            assert!(!result.robots_txt_allowed);
            assert!(result.pages.is_empty());
        }
        other => panic!("Expected RobotsDenied, got {:?}", other),
    }
}

#[tokio::test]
async fn test_robots_disallowed_path_skipped() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nDisallow: /private").await;
    mount_page(
        &mock_server,
        "/",
        html_page(
            "Home",
            r#"<a href="/private/report">Private</a><a href="/public">Public</a>"#,
        ),
    )
    .await;
    mount_page_expecting(&mock_server, "/private/report", html_page("Private", ""), 0).await;
    mount_page(&mock_server, "/public", html_page("Public", "")).await;

    let result = crawl(
        create_test_config(),
        &format!("{}/", base_url),
        &CrawlOptions::default(),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(
        urls(&result),
        vec![format!("{}/", base_url), format!("{}/public", base_url)]
    );
    assert!(result.errors.is_empty());
}

#[tokio::test]
async fn test_robots_ignored_when_disabled() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nDisallow: /").await;
    mount_page(&mock_server, "/", html_page("Home", "")).await;

    let options = CrawlOptions {
        respect_robots_txt: Some(false),
        ..Default::default()
    };
    let result = crawl(create_test_config(), &format!("{}/", base_url), &options)
        .await
        .expect("Crawl failed");

    assert_eq!(result.pages.len(), 1);
}

#[tokio::test]
async fn test_sitemap_urls_seed_frontier() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let sitemap = format!(
        r#"<?xml version="1.0"?><urlset>
            <url><loc>{}/products/hidden</loc></url>
            <url><loc>https://elsewhere.invalid/page</loc></url>
        </urlset>"#,
        base_url
    );
    mount_page(
        &mock_server,
        "/sitemap.xml",
        ResponseTemplate::new(200).set_body_string(sitemap),
    )
    .await;
    mount_page(&mock_server, "/", html_page("Home", "")).await;
    mount_page_expecting(&mock_server, "/products/hidden", html_page("Hidden", ""), 1).await;

    let result = crawl(
        create_test_config(),
        &format!("{}/", base_url),
        &CrawlOptions::default(),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(
        result.sitemap_urls,
        vec![format!("{}/products/hidden", base_url)]
    );
    assert_eq!(
        urls(&result),
        vec![
            format!("{}/", base_url),
            format!("{}/products/hidden", base_url)
        ]
    );
}

#[tokio::test]
async fn test_invalid_root_url_rejected_before_fetching() {
    let crawler = Crawler::new(create_test_config()).expect("Failed to build crawler");

    let result = crawler.request("not a url", &CrawlOptions::default());
    assert!(matches!(result, Err(CrawlerError::InvalidUrl(_))));

    let result = crawler.request("ftp://shop.test/", &CrawlOptions::default());
    assert!(matches!(result, Err(CrawlerError::InvalidUrl(_))));
}

async fn mount_three_page_chain(mock_server: &MockServer) {
    mount_page(mock_server, "/", html_page("Home", r#"<a href="/a">A</a>"#)).await;
    mount_page(mock_server, "/a", html_page("A", r#"<a href="/b">B</a>"#)).await;
    mount_page(mock_server, "/b", html_page("B", "Leaf")).await;
}

#[tokio::test]
async fn test_rate_limit_spaces_fetches() {
    let mock_server = MockServer::start().await;
    mount_three_page_chain(&mock_server).await;

    let options = CrawlOptions {
        rate_limit_ms: Some(150),
        ..Default::default()
    };

    let start = Instant::now();
    let result = crawl(
        create_test_config(),
        &format!("{}/", mock_server.uri()),
        &options,
    )
    .await
    .expect("Crawl failed");
    let elapsed = start.elapsed();

    assert_eq!(result.pages.len(), 3);
    // Two pauses: none before the first fetch
    assert!(elapsed >= Duration::from_millis(300), "elapsed {:?}", elapsed);
}

#[tokio::test]
async fn test_no_pause_before_first_fetch() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", html_page("Home", "Leaf")).await;

    let options = CrawlOptions {
        rate_limit_ms: Some(5_000),
        ..Default::default()
    };

    let start = Instant::now();
    let result = crawl(
        create_test_config(),
        &format!("{}/", mock_server.uri()),
        &options,
    )
    .await
    .expect("Crawl failed");

    assert_eq!(result.pages.len(), 1);
    assert!(start.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn test_crawl_delay_replaces_rate_limit() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "User-agent: *\nCrawl-delay: 0.2").await;
    mount_three_page_chain(&mock_server).await;

    let options = CrawlOptions {
        rate_limit_ms: Some(5_000),
        ..Default::default()
    };

    let start = Instant::now();
    let result = crawl(
        create_test_config(),
        &format!("{}/", mock_server.uri()),
        &options,
    )
    .await
    .expect("Crawl failed");
    let elapsed = start.elapsed();

    assert_eq!(result.pages.len(), 3);
    assert!(elapsed >= Duration::from_millis(400), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_secs(4), "elapsed {:?}", elapsed);
}
