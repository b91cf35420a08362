//! Markdown summary generation
//!
//! This module generates human-readable markdown summaries of crawl results:
//! statistics, platform, products, collections, design and errors.

use crate::model::CrawlResult;
use crate::output::stats::CrawlStatistics;
use crate::output::OutputResult;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Rows shown per table before the remainder is summarised
const TABLE_LIMIT: usize = 50;

/// Writes a markdown summary of a crawl result
///
/// # Arguments
///
/// * `result` - The finished crawl
/// * `root_url` - The URL the crawl started from
/// * `output_path` - Path where the markdown file should be written
pub fn generate_markdown_summary(
    result: &CrawlResult,
    root_url: &str,
    output_path: &Path,
) -> OutputResult<()> {
    let markdown = format_markdown_summary(result, root_url, Utc::now());

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl result as markdown
pub fn format_markdown_summary(
    result: &CrawlResult,
    root_url: &str,
    generated_at: DateTime<Utc>,
) -> String {
    let stats = CrawlStatistics::from_result(result);
    let mut md = String::new();

    md.push_str("# Storefront Crawl Summary\n\n");

    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Root URL**: {}\n", root_url));
    md.push_str(&format!("- **Generated**: {}\n", generated_at.to_rfc3339()));
    md.push_str(&format!("- **Platform**: {}\n", result.platform));
    md.push_str(&format!(
        "- **robots.txt allowed**: {}\n\n",
        if result.robots_txt_allowed { "yes" } else { "no" }
    ));

    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Pages**: {}\n", stats.total_pages));
    md.push_str(&format!("- **Products**: {}\n", stats.total_products));
    md.push_str(&format!("- **Collections**: {}\n", stats.total_collections));
    md.push_str(&format!("- **Links**: {}\n", stats.total_links));
    md.push_str(&format!("- **Errors**: {}\n", stats.total_errors));
    md.push_str(&format!("- **Success Rate**: {:.2}%\n\n", stats.success_rate()));

    if !stats.pages_by_type.is_empty() {
        md.push_str("## Page Type Breakdown\n\n");
        md.push_str("| Type | Count |\n");
        md.push_str("|------|-------|\n");
        for (page_type, count) in &stats.pages_by_type {
            md.push_str(&format!("| {} | {} |\n", page_type, count));
        }
        md.push('\n');
    }

    if !result.products.is_empty() {
        md.push_str("## Products\n\n");
        md.push_str("| Name | Price | Source |\n");
        md.push_str("|------|-------|--------|\n");
        for product in result.products.iter().take(TABLE_LIMIT) {
            let price = match &product.currency {
                Some(currency) => format!("{:.2} {}", product.price, currency),
                None => format!("{:.2}", product.price),
            };
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                escape_cell(&product.name),
                price,
                product.source_url
            ));
        }
        push_overflow(&mut md, result.products.len());
    }

    if !result.collections.is_empty() {
        md.push_str("## Collections\n\n");
        for collection in result.collections.iter().take(TABLE_LIMIT) {
            md.push_str(&format!("- {} ({})\n", collection.name, collection.url));
        }
        push_overflow(&mut md, result.collections.len());
    }

    if !result.design.is_empty() {
        let design = &result.design;
        md.push_str("## Design\n\n");
        if let Some(logo) = &design.logo {
            md.push_str(&format!("- **Logo**: {}\n", logo));
        }
        if !design.colors.primary.is_empty() {
            md.push_str(&format!(
                "- **Primary colours**: {}\n",
                design.colors.primary.join(", ")
            ));
        }
        if !design.colors.secondary.is_empty() {
            md.push_str(&format!(
                "- **Secondary colours**: {}\n",
                design.colors.secondary.join(", ")
            ));
        }
        if !design.fonts.headings.is_empty() {
            md.push_str(&format!(
                "- **Heading fonts**: {}\n",
                design.fonts.headings.join(", ")
            ));
        }
        if !design.fonts.body.is_empty() {
            md.push_str(&format!("- **Body fonts**: {}\n", design.fonts.body.join(", ")));
        }
        if !design.navigation.header.is_empty() {
            md.push_str("- **Navigation**:\n");
            for link in &design.navigation.header {
                md.push_str(&format!("  - [{}]({})\n", link.title, link.url));
            }
        }
        md.push('\n');
    }

    if !result.errors.is_empty() {
        md.push_str("## Errors\n\n");
        for error in &result.errors {
            md.push_str(&format!("- {}\n", error));
        }
        md.push('\n');
    }

    md
}

fn push_overflow(md: &mut String, total: usize) {
    if total > TABLE_LIMIT {
        md.push_str(&format!("\n... and {} more\n\n", total - TABLE_LIMIT));
    } else {
        md.push('\n');
    }
}

/// Pipes would split a table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
