//! Manufacturer page extraction and cross-referencing
//!
//! A manufacturer page contributes a handful of static fields; everything
//! else is derived by joining against the products extracted earlier in the
//! run. The join key is the manufacturer display name, compared by exact
//! string equality against each product's brand.

use crate::accumulator::ProductLog;
use crate::extract::page::PageDocument;
use crate::extract::{ExtractError, ExtractResult};
use crate::metrics::{reliability, weighted_rating};
use crate::records::{ManufacturerRecord, ProductEntry};
use url::Url;

/// Decorative wrapper around the manufacturer name in the category breadcrumb
const LABEL_DECORATION: &str = "/Manufacturers/";

/// Extracts a [`ManufacturerRecord`], joining against `log` for the products
///
/// The manufacturer label and the logo path are required; their absence
/// drops the page. The products list is a snapshot of the log at call time
/// and is never revised after the record is emitted.
pub fn extract_manufacturer(
    doc: &PageDocument,
    log: &ProductLog,
    origin: &Url,
) -> ExtractResult<ManufacturerRecord> {
    let label = doc
        .select_text("div.nosto_category")
        .ok_or_else(|| ExtractError::MissingField {
            url: doc.url().to_string(),
            selector: "div.nosto_category",
        })?;
    let manufacturer = strip_label_decoration(&label);

    let logo_path = doc
        .select_attr(".page-manufacturer-logo", "src")
        .ok_or_else(|| ExtractError::MissingField {
            url: doc.url().to_string(),
            selector: ".page-manufacturer-logo",
        })?;
    let logo_image_url = origin
        .join(&logo_path)
        .map_err(|_| ExtractError::LogoPath {
            url: doc.url().to_string(),
            path: logo_path.clone(),
        })?
        .to_string();

    let about = doc.select_text("div.page-manufacturer-about");

    let matched = log.find_by_manufacturer(&manufacturer);
    let products: Vec<ProductEntry> = matched
        .iter()
        .map(|record| ProductEntry::from_record(record))
        .collect();

    let review_count: f64 = matched
        .iter()
        .map(|record| f64::from(record.review_count))
        .sum();
    let pairs: Vec<(u32, u32)> = matched
        .iter()
        .map(|record| (record.rating, record.review_count))
        .collect();
    let rating = weighted_rating(&pairs);

    Ok(ManufacturerRecord {
        url: doc.url().to_string(),
        title: doc.title(),
        manufacturer,
        about,
        rating,
        review_count,
        reliability: reliability(review_count, rating),
        product_count: products.len(),
        products,
        logo_image_url,
    })
}

/// Strips the breadcrumb decoration from a manufacturer label
///
/// NOTE: this trims any character of `"/Manufacturers/"` from either end,
/// not the literal substring, so a brand whose name starts or ends with one
/// of those letters loses it (`"/Manufacturers/Natives"` becomes
/// `"Nativ"`). The product join key depends on the trimmed form, so
/// changing this changes which products match; kept as-is pending a ruling
/// from the catalog owners.
fn strip_label_decoration(label: &str) -> String {
    label
        .trim_matches(|c| LABEL_DECORATION.contains(c))
        .to_string()
}
