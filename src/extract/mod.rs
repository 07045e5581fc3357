//! Per-page-type attribute extractors
//!
//! This module turns fetched pages into records:
//! - Product pages via a structured-pricing primary path with a
//!   display-price fallback
//! - Manufacturer pages via static fields plus a cross-reference join
//!   against previously extracted products
//!
//! Extraction failures are page-local. A failed page produces no record and
//! no accumulator entry; the run continues with the next page.

mod manufacturer;
mod page;
mod product;

pub use manufacturer::extract_manufacturer;
pub use page::PageDocument;
pub use product::extract_product;

use thiserror::Error;

/// A per-page extraction failure
///
/// Any of these drops the page's record. None of them abort the run.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("missing required field {selector} on {url}")]
    MissingField { url: String, selector: &'static str },

    #[error("category list on {url} has {found} entries, need at least 2")]
    CategoryIndex { url: String, found: usize },

    #[error("field {selector} on {url} is not a number: {value:?}")]
    Number {
        url: String,
        selector: &'static str,
        value: String,
    },

    #[error("could not resolve logo path {path:?} on {url}")]
    LogoPath { url: String, path: String },
}

/// Result type alias for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
