//! Data model shared by the crawler, the extractors and the API
//!
//! Wire names follow the JSON contract of `POST /crawl` (camelCase).

mod design;
mod records;
mod request;
mod result;

pub use design::{ColorPalette, DesignProfile, FontSet, NavLink, Navigation};
pub use records::{CollectionRecord, PageRecord, PageType, Platform, ProductRecord};
pub use request::{CrawlOptions, CrawlRequest};
pub use result::CrawlResult;
