//! Product page extraction
//!
//! Pricing comes from an embedded structured payload when the page carries
//! one, and from a bare display price otherwise. Only the anticipated
//! primary-path failures trigger the fallback; anything unexpected in the
//! rest of the page is a per-page extraction failure.

use crate::extract::page::PageDocument;
use crate::extract::{ExtractError, ExtractResult};
use crate::records::ProductRecord;
use thiserror::Error;

/// Assumed discount already applied to a bare display price, used to
/// back-compute a list price when the structured payload is absent
const ASSUMED_DISCOUNT: f64 = 0.789;

/// Pricing fields shared by both extraction paths
#[derive(Debug, Clone, Copy)]
struct Pricing {
    sell_price: f64,
    list_price: f64,
    on_sale: bool,
    savings: f64,
    discount: f64,
}

/// The anticipated primary-path failures; each of these falls through to
/// the display-price fallback instead of failing the page
#[derive(Debug, Error)]
enum PricingError {
    #[error("no pricing payload on the page")]
    MissingPayload,

    #[error("pricing payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("pricing payload is missing {0}")]
    MissingKey(&'static str),

    #[error("unparseable currency amount {0:?}")]
    Currency(String),

    #[error("list price is zero")]
    ZeroListPrice,
}

/// Extracts a [`ProductRecord`] from a fetched product page
///
/// Pricing resolution is an ordered fallback: the structured payload first,
/// the display price second. The remaining attributes always come from the
/// page's metadata block regardless of which price path was taken. Any
/// missing required attribute drops the page.
pub fn extract_product(doc: &PageDocument) -> ExtractResult<ProductRecord> {
    let pricing = match structured_pricing(doc) {
        Ok(pricing) => pricing,
        Err(error) => {
            tracing::debug!(
                url = %doc.url(),
                %error,
                "structured pricing unavailable, falling back to display price"
            );
            fallback_pricing(doc)?
        }
    };

    let id = require_text(doc, "div.nosto_product span.product_id")?;
    let image_url = require_text(doc, "div.nosto_product span.image_url")?;
    let availability = require_text(doc, "div.nosto_product span.availability")?;
    let manufacturer = require_text(doc, "div.nosto_product span.brand")?;
    let description = require_text(doc, "div.nosto_product span.description")?;

    let categories = doc.select_text_all("div.nosto_product span.category");
    if categories.len() < 2 {
        return Err(ExtractError::CategoryIndex {
            url: doc.url().to_string(),
            found: categories.len(),
        });
    }
    // Index 1 is the site's genre label; index 0 is a root bucket. Known
    // fragility, kept for output compatibility.
    let categories = categories[1].clone();

    // Ratings arrive fractional; the record carries whole stars, truncated
    // rather than rounded.
    let rating = require_parsed::<f64>(doc, "div.nosto_product span.rating_value")? as u32;
    let review_count = require_parsed::<u32>(doc, "div.nosto_product span.review_count")?;

    Ok(ProductRecord {
        id,
        url: doc.url().to_string(),
        title: doc.title(),
        name: doc.select_text("h1"),
        manufacturer,
        categories,
        description,
        on_sale: pricing.on_sale,
        sell_price: pricing.sell_price,
        list_price: pricing.list_price,
        savings: pricing.savings,
        discount: pricing.discount,
        availability,
        rating,
        review_count,
        image_url,
    })
}

/// Primary path: the serialized buy-box props embedded in the page markup
fn structured_pricing(doc: &PageDocument) -> Result<Pricing, PricingError> {
    let payload = doc
        .select_attr(r#"div[data-react-class="BuyBox"]"#, "data-react-props")
        .ok_or(PricingError::MissingPayload)?;
    let props: serde_json::Value = serde_json::from_str(&payload)?;

    let sell_price = currency_amount(string_key(&props, "sell_price")?)?;
    let list_price = currency_amount(string_key(&props, "regular_price")?)?;
    let on_sale = props
        .get("on_sale")
        .and_then(serde_json::Value::as_bool)
        .ok_or(PricingError::MissingKey("on_sale"))?;

    if list_price == 0.0 {
        return Err(PricingError::ZeroListPrice);
    }

    Ok(Pricing {
        sell_price,
        list_price,
        on_sale,
        savings: list_price - sell_price,
        discount: 100.0 - 100.0 * (sell_price / list_price),
    })
}

/// Fallback path: treat the bare display price as already discounted and
/// back-compute the list price; no discount signal is available here
fn fallback_pricing(doc: &PageDocument) -> ExtractResult<Pricing> {
    let display = require_parsed::<f64>(doc, "div.nosto_product span.price")?;
    let sell_price = round_cents(display / ASSUMED_DISCOUNT);

    Ok(Pricing {
        sell_price,
        list_price: sell_price,
        on_sale: false,
        savings: 0.0,
        discount: 0.0,
    })
}

/// Parses a currency display string such as `"$1,299.99"`
///
/// The currency symbol and thousands separators are stripped and the amount
/// truncates to whole dollars. Dropping cents is deliberate; the rest of the
/// pipeline works with the truncated amounts.
fn currency_amount(raw: &str) -> Result<f64, PricingError> {
    let cleaned = raw.replace('$', "").replace(',', "");
    let dollars = cleaned.split('.').next().unwrap_or_default();
    dollars
        .trim()
        .parse()
        .map_err(|_| PricingError::Currency(raw.to_string()))
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn string_key<'a>(
    props: &'a serde_json::Value,
    key: &'static str,
) -> Result<&'a str, PricingError> {
    props
        .get(key)
        .and_then(serde_json::Value::as_str)
        .ok_or(PricingError::MissingKey(key))
}

fn require_text(doc: &PageDocument, selector: &'static str) -> ExtractResult<String> {
    doc.select_text(selector)
        .ok_or_else(|| ExtractError::MissingField {
            url: doc.url().to_string(),
            selector,
        })
}

fn require_parsed<T: std::str::FromStr>(
    doc: &PageDocument,
    selector: &'static str,
) -> ExtractResult<T> {
    let raw = require_text(doc, selector)?;
    raw.parse().map_err(|_| ExtractError::Number {
        url: doc.url().to_string(),
        selector,
        value: raw,
    })
}
