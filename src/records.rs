//! Record types emitted by the pipeline
//!
//! These structs define the exact wire shape of the two record kinds the
//! pipeline produces. Downstream aggregation tools match on the serialized
//! key names, including the literal `($)` suffix on price fields, so the
//! serde renames here are part of the output contract.

use serde::{Deserialize, Serialize};

/// One extracted product page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Site-assigned product identifier
    pub id: String,

    /// The page URL this record was extracted from
    pub url: String,

    /// Page title, when the page has a `<title>` element
    pub title: Option<String>,

    /// Display name from the page heading
    pub name: Option<String>,

    /// Brand name; the join key for manufacturer cross-referencing
    pub manufacturer: String,

    /// Primary category label
    pub categories: String,

    pub description: String,

    pub on_sale: bool,

    #[serde(rename = "sell_price($)")]
    pub sell_price: f64,

    #[serde(rename = "list_price($)")]
    pub list_price: f64,

    #[serde(rename = "savings($)")]
    pub savings: f64,

    /// Discount percentage (0-100)
    pub discount: f64,

    pub availability: String,

    /// Star rating truncated to a whole number (0-5)
    pub rating: u32,

    pub review_count: u32,

    pub image_url: String,
}

/// One extracted manufacturer page, with its cross-referenced products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturerRecord {
    pub url: String,

    pub title: Option<String>,

    /// Display name derived from the page's category breadcrumb
    pub manufacturer: String,

    pub about: Option<String>,

    /// Review-weighted average rating across matched products
    pub rating: f64,

    /// Total reviews across matched products
    pub review_count: f64,

    /// Popularity-weighted quality score: `review_count * rating^2`
    pub reliability: f64,

    pub product_count: usize,

    /// Snapshot of the products matched at extraction time; never updated
    /// after the record is emitted
    pub products: Vec<ProductEntry>,

    pub logo_image_url: String,
}

/// A product reference inside a [`ManufacturerRecord`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: Option<String>,
    pub attributes: ProductAttributes,
}

/// The fixed attribute set carried for each cross-referenced product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttributes {
    pub id: String,

    pub categories: String,

    #[serde(rename = "sell_price($)")]
    pub sell_price: f64,

    #[serde(rename = "list_price($)")]
    pub list_price: f64,

    pub on_sale: bool,

    pub review_count: u32,

    pub rating: u32,
}

impl ProductEntry {
    /// Builds a manufacturer-side product entry from a full product record
    pub fn from_record(record: &ProductRecord) -> Self {
        Self {
            name: record.name.clone(),
            attributes: ProductAttributes {
                id: record.id.clone(),
                categories: record.categories.clone(),
                sell_price: record.sell_price,
                list_price: record.list_price,
                on_sale: record.on_sale,
                review_count: record.review_count,
                rating: record.rating,
            },
        }
    }
}
