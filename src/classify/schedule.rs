//! Visit ordering for seed URLs
//!
//! Manufacturer extraction joins against every product record extracted so
//! far, and an emitted manufacturer record is never patched afterwards. The
//! ordering here is what makes that join complete: every product page is
//! visited before any manufacturer page. There is no retry or re-visit
//! mechanism to compensate for a wrong order.

use crate::classify::{classify_url, PageKind};
use crate::BrandweaveError;
use std::path::Path;

/// Priority class for a page kind; lower values are visited first
pub fn visit_priority(kind: PageKind) -> u8 {
    match kind {
        PageKind::Product => 1,
        PageKind::Manufacturer => 2,
        PageKind::Unclassified => 3,
    }
}

/// Orders seed URLs into the visit sequence
///
/// Unclassified URLs are dropped entirely; they are never fetched. The rest
/// are stably sorted by priority class, so all product pages come before all
/// manufacturer pages and the input order is preserved within each class.
pub fn order_seeds(seeds: Vec<String>) -> Vec<String> {
    let mut classified: Vec<(u8, String)> = seeds
        .into_iter()
        .filter_map(|url| match classify_url(&url) {
            PageKind::Unclassified => {
                tracing::debug!(%url, "dropping unclassified seed");
                None
            }
            kind => Some((visit_priority(kind), url)),
        })
        .collect();

    // Stable sort: ties keep their original position
    classified.sort_by_key(|(priority, _)| *priority);

    classified.into_iter().map(|(_, url)| url).collect()
}

/// Loads the seed list: one URL per line, UTF-8, blank lines skipped
///
/// An unreadable seed file is a fatal startup error; without seeds there is
/// nothing to run.
pub fn load_seed_list(path: &Path) -> Result<Vec<String>, BrandweaveError> {
    let content = std::fs::read_to_string(path).map_err(|source| BrandweaveError::SeedList {
        path: path.display().to_string(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_products_precede_manufacturers() {
        let seeds = vec![
            "https://shop.example/manufacturers/acme".to_string(),
            "https://shop.example/products/synth-one".to_string(),
            "https://shop.example/products/synth-two".to_string(),
        ];

        let ordered = order_seeds(seeds);
        assert_eq!(
            ordered,
            vec![
                "https://shop.example/products/synth-one",
                "https://shop.example/products/synth-two",
                "https://shop.example/manufacturers/acme",
            ]
        );
    }

    #[test]
    fn test_unclassified_seeds_are_dropped() {
        let seeds = vec![
            "https://shop.example/manufacturers/acme".to_string(),
            "https://shop.example/deals".to_string(),
            "https://shop.example/products/synth-one".to_string(),
            "not a url".to_string(),
        ];

        let ordered = order_seeds(seeds);
        assert_eq!(
            ordered,
            vec![
                "https://shop.example/products/synth-one",
                "https://shop.example/manufacturers/acme",
            ]
        );
    }

    #[test]
    fn test_order_within_class_is_input_order() {
        let seeds = vec![
            "https://shop.example/products/c".to_string(),
            "https://shop.example/manufacturers/y".to_string(),
            "https://shop.example/products/a".to_string(),
            "https://shop.example/manufacturers/x".to_string(),
            "https://shop.example/products/b".to_string(),
        ];

        let ordered = order_seeds(seeds);
        assert_eq!(
            ordered,
            vec![
                "https://shop.example/products/c",
                "https://shop.example/products/a",
                "https://shop.example/products/b",
                "https://shop.example/manufacturers/y",
                "https://shop.example/manufacturers/x",
            ]
        );
    }

    #[test]
    fn test_empty_seed_list_orders_to_empty() {
        assert!(order_seeds(vec![]).is_empty());
    }

    #[test]
    fn test_load_seed_list_trims_and_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "https://shop.example/products/a\n\n  https://shop.example/products/b  \n"
        )
        .unwrap();
        file.flush().unwrap();

        let seeds = load_seed_list(file.path()).unwrap();
        assert_eq!(
            seeds,
            vec![
                "https://shop.example/products/a",
                "https://shop.example/products/b",
            ]
        );
    }

    #[test]
    fn test_load_seed_list_missing_file_is_fatal() {
        let result = load_seed_list(Path::new("/nonexistent/urls.txt"));
        assert!(matches!(result, Err(BrandweaveError::SeedList { .. })));
    }
}
