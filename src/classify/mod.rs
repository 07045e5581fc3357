//! Page classification by URL path markers
//!
//! The catalog exposes two page shapes worth extracting: product pages under
//! a `/products/` path segment and manufacturer pages under
//! `/manufacturers/`. Everything else is left unclassified and is filtered
//! out before scheduling.

mod schedule;

pub use schedule::{load_seed_list, order_seeds, visit_priority};

use url::Url;

/// The page shapes the pipeline knows how to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Product,
    Manufacturer,
    Unclassified,
}

/// Classifies a URL by its path markers
///
/// A URL with a `products` path segment is a product page; one with a
/// `manufacturers` segment is a manufacturer page. The product check runs
/// first, so a URL carrying both markers classifies as a product. URLs that
/// fail to parse, or match neither marker, are `Unclassified`.
///
/// # Examples
///
/// ```
/// use brandweave::classify::{classify_url, PageKind};
///
/// assert_eq!(
///     classify_url("https://shop.example/products/synth-one"),
///     PageKind::Product
/// );
/// assert_eq!(
///     classify_url("https://shop.example/manufacturers/acme"),
///     PageKind::Manufacturer
/// );
/// assert_eq!(
///     classify_url("https://shop.example/deals"),
///     PageKind::Unclassified
/// );
/// ```
pub fn classify_url(url: &str) -> PageKind {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return PageKind::Unclassified,
    };

    if has_path_segment(&parsed, "products") {
        PageKind::Product
    } else if has_path_segment(&parsed, "manufacturers") {
        PageKind::Manufacturer
    } else {
        PageKind::Unclassified
    }
}

fn has_path_segment(url: &Url, marker: &str) -> bool {
    url.path_segments()
        .map(|mut segments| segments.any(|segment| segment == marker))
        .unwrap_or(false)
}
