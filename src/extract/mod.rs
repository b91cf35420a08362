//! Content extractors run against fetched pages
//!
//! - `products`: JSON-LD `Product` entries
//! - `collections`: collection/category landing pages
//! - `design`: colours, fonts, logo and navigation of the root page

mod collections;
mod design;
mod products;

pub use collections::extract_collection;
pub use design::extract_design;
pub use products::extract_products;
