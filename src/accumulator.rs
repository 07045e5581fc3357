//! Cross-reference accumulator for extracted product records
//!
//! Manufacturer pages are visited after all product pages, so by the time a
//! manufacturer page is processed every one of its products is already in
//! this log. The log is owned by the pipeline run and passed into the
//! extractors explicitly; it is appended to by the product path and only
//! read by the manufacturer path.

use crate::records::ProductRecord;

/// Append-only, run-lifetime store of every product record extracted so far
///
/// Lookup is a linear scan. Catalogs are small and one manufacturer page is
/// processed at a time, so the simple structure is sufficient; a map keyed
/// by manufacturer name would satisfy the same contract for larger runs.
#[derive(Debug, Default)]
pub struct ProductLog {
    records: Vec<ProductRecord>,
}

impl ProductLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Duplicate product ids are kept as separate entries;
    /// nothing deduplicates the log.
    pub fn append(&mut self, record: ProductRecord) {
        self.records.push(record);
    }

    /// Returns every record whose `manufacturer` equals `name` exactly, in
    /// insertion order
    ///
    /// The comparison is case- and whitespace-sensitive; no normalization is
    /// applied to either side. An empty result is an ordinary outcome, not
    /// an error.
    pub fn find_by_manufacturer(&self, name: &str) -> Vec<&ProductRecord> {
        self.records
            .iter()
            .filter(|record| record.manufacturer == name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, manufacturer: &str) -> ProductRecord {
        ProductRecord {
            id: id.to_string(),
            url: format!("https://shop.example/products/{id}"),
            title: None,
            name: Some(id.to_string()),
            manufacturer: manufacturer.to_string(),
            categories: "/Instruments/Synth".to_string(),
            description: String::new(),
            on_sale: false,
            sell_price: 10.0,
            list_price: 10.0,
            savings: 0.0,
            discount: 0.0,
            availability: "InStock".to_string(),
            rating: 4,
            review_count: 1,
            image_url: String::new(),
        }
    }

    #[test]
    fn test_empty_log_returns_empty_match() {
        let log = ProductLog::new();
        assert!(log.find_by_manufacturer("Acme").is_empty());
    }

    #[test]
    fn test_no_match_returns_empty() {
        let mut log = ProductLog::new();
        log.append(record("a", "Acme"));

        assert!(log.find_by_manufacturer("Other").is_empty());
    }

    #[test]
    fn test_matches_in_insertion_order() {
        let mut log = ProductLog::new();
        log.append(record("a", "Acme"));
        log.append(record("b", "Other"));
        log.append(record("c", "Acme"));

        let matched = log.find_by_manufacturer("Acme");
        let ids: Vec<&str> = matched.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut log = ProductLog::new();
        log.append(record("a", "Acme"));

        assert!(log.find_by_manufacturer("acme").is_empty());
        assert!(log.find_by_manufacturer("ACME").is_empty());
        assert_eq!(log.find_by_manufacturer("Acme").len(), 1);
    }

    #[test]
    fn test_lookup_is_whitespace_sensitive() {
        let mut log = ProductLog::new();
        log.append(record("a", "Acme "));

        assert!(log.find_by_manufacturer("Acme").is_empty());
        assert_eq!(log.find_by_manufacturer("Acme ").len(), 1);
    }

    #[test]
    fn test_duplicate_ids_are_preserved() {
        let mut log = ProductLog::new();
        log.append(record("a", "Acme"));
        log.append(record("a", "Acme"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.find_by_manufacturer("Acme").len(), 2);
    }
}
