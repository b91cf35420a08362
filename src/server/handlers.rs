use crate::model::{CrawlOptions, CrawlResult};
use crate::server::error::ApiError;
use crate::server::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Body of `POST /crawl`
#[derive(Debug, Default, Deserialize)]
pub struct CrawlBody {
    pub url: Option<String>,
    #[serde(default)]
    pub options: CrawlOptions,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Runs one crawl and returns the aggregated result
///
/// Returns 400 for a missing or malformed URL or body, 403 when robots.txt
/// forbids the root URL, and 200 with a best-effort result otherwise.
pub async fn crawl_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CrawlResult>, ApiError> {
    let body = parse_body(&body)?;

    let url = body
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::BadRequest("URL is required".to_string()))?;

    let request = state.crawler.request(url, &body.options)?;
    let result = state.crawler.crawl(request).await?;

    Ok(Json(result))
}

/// Any method other than POST on `/crawl`
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// An empty body is treated like a body without `url`
fn parse_body(bytes: &[u8]) -> Result<CrawlBody, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(CrawlBody::default());
    }

    serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!("Rejecting request body: {}", e);
        ApiError::BadRequest("Invalid request body".to_string())
    })
}
