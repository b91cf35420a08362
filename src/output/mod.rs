//! Output module for crawl summaries and reports
//!
//! This module handles:
//! - Computing and printing crawl statistics
//! - Generating markdown summaries of crawl results
//! - Exporting the result as JSON

mod json;
mod markdown;
pub mod stats;

pub use json::write_json_result;
pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use stats::{print_statistics, CrawlStatistics};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
