//! Fetched page abstraction
//!
//! Wraps a resolved URL and its parsed markup behind the three query shapes
//! the extractors need: first-match text, first-match attribute, and all
//! matching text values.

use scraper::{Html, Selector};
use url::Url;

/// A fetched page ready for querying
pub struct PageDocument {
    url: Url,
    raw: String,
    document: Html,
}

impl PageDocument {
    /// Parses page markup. HTML parsing itself never fails; malformed input
    /// just yields a sparse tree and the extractors surface what is missing.
    pub fn parse(url: Url, html: &str) -> Self {
        Self {
            url,
            raw: html.to_string(),
            document: Html::parse_document(html),
        }
    }

    /// The resolved URL this page was fetched from
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The unparsed page body, for callers digging embedded payloads out of
    /// markup the selector engine cannot reach
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Text of the first element matching `selector`, trimmed; `None` when
    /// nothing matches or the match is empty
    pub fn select_text(&self, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;

        self.document
            .select(&selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
    }

    /// Value of `attr` on the first element matching `selector`
    pub fn select_attr(&self, selector: &str, attr: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;

        self.document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr(attr))
            .map(str::to_string)
    }

    /// Trimmed text of every element matching `selector`, in document order
    pub fn select_text_all(&self, selector: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };

        self.document
            .select(&selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .collect()
    }

    /// The page `<title>` text, when present
    pub fn title(&self) -> Option<String> {
        self.select_text("title")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> PageDocument {
        let url = Url::parse("https://shop.example/products/synth").unwrap();
        PageDocument::parse(url, html)
    }

    #[test]
    fn test_select_text_first_match() {
        let doc = page(r#"<span class="brand"> Acme </span><span class="brand">Other</span>"#);
        assert_eq!(doc.select_text("span.brand"), Some("Acme".to_string()));
    }

    #[test]
    fn test_select_text_no_match() {
        let doc = page("<div></div>");
        assert_eq!(doc.select_text("span.brand"), None);
    }

    #[test]
    fn test_select_text_empty_match_is_none() {
        let doc = page(r#"<span class="brand">   </span>"#);
        assert_eq!(doc.select_text("span.brand"), None);
    }

    #[test]
    fn test_select_attr() {
        let doc = page(r#"<img class="logo" src="/logos/acme.png" />"#);
        assert_eq!(
            doc.select_attr("img.logo", "src"),
            Some("/logos/acme.png".to_string())
        );
        assert_eq!(doc.select_attr("img.logo", "alt"), None);
    }

    #[test]
    fn test_select_text_all_in_document_order() {
        let doc = page(
            r#"<span class="category">/A</span><span class="category">/B</span><span class="category">/C</span>"#,
        );
        assert_eq!(doc.select_text_all("span.category"), vec!["/A", "/B", "/C"]);
    }

    #[test]
    fn test_title() {
        let doc = page("<html><head><title> Synth | Shop </title></head></html>");
        assert_eq!(doc.title(), Some("Synth | Shop".to_string()));
    }

    #[test]
    fn test_missing_title() {
        let doc = page("<html><head></head><body></body></html>");
        assert_eq!(doc.title(), None);
    }

    #[test]
    fn test_raw_preserves_input() {
        let html = r#"<html><body><script>var x = {"a": 1};</script></body></html>"#;
        let doc = page(html);
        assert_eq!(doc.raw(), html);
    }
}
