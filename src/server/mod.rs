//! HTTP API
//!
//! `POST /crawl` runs one crawl per request and answers with the result;
//! `GET /health` reports liveness. The only shared state is the crawler,
//! whose configuration is immutable and whose HTTP client is shareable.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::CrawlBody;

use crate::config::Config;
use crate::crawler::Crawler;
use crate::CrawlerError;
use axum::routing::{get, post};
use axum::Router;
use handlers::{crawl_handler, health_handler, method_not_allowed};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// State shared with every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub crawler: Crawler,
}

/// Builds the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/crawl", post(crawl_handler).fallback(method_not_allowed))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the API on `bind_address` until Ctrl-C
pub async fn serve(config: Config, bind_address: &str) -> Result<(), CrawlerError> {
    let state = AppState {
        crawler: Crawler::new(config)?,
    };

    let listener = TcpListener::bind(bind_address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
