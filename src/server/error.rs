use crate::model::CrawlResult;
use crate::CrawlerError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Failure of an API request, rendered as `{ "error": message }`
///
/// A robots.txt refusal also carries the partial result as `result`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    BadRequest(String),
    RobotsDenied(Box<CrawlResult>),
    MethodNotAllowed,
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a CrawlResult>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::RobotsDenied(_) => StatusCode::FORBIDDEN,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(message) | ApiError::Internal(message) => message,
            ApiError::RobotsDenied(_) => "Crawling not allowed by robots.txt",
            ApiError::MethodNotAllowed => "Method not allowed",
        }
    }
}

impl From<CrawlerError> for ApiError {
    fn from(e: CrawlerError) -> Self {
        match e {
            CrawlerError::InvalidUrl(_) => ApiError::BadRequest("Invalid URL format".to_string()),
            CrawlerError::InvalidOptions(message) => ApiError::BadRequest(message),
            CrawlerError::RobotsDenied { result, .. } => ApiError::RobotsDenied(result),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.message());
        }

        let result = match &self {
            ApiError::RobotsDenied(result) => Some(result.as_ref()),
            _ => None,
        };
        let body = ErrorBody {
            error: self.message(),
            result,
        };
        (status, Json(body)).into_response()
    }
}
