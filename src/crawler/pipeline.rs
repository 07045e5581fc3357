//! Pipeline orchestration
//!
//! Runs the full extraction sequence: load seeds, order them so product
//! pages precede manufacturer pages, then fetch and process one page at a
//! time. The single visit stream is load-bearing: manufacturer extraction
//! reads the accumulator that product extraction writes, so classification,
//! extraction, and accumulation must happen in the scheduled order even if
//! fetching were ever parallelized.

use crate::accumulator::ProductLog;
use crate::classify::{classify_url, load_seed_list, order_seeds, PageKind};
use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::extract::{extract_manufacturer, extract_product, PageDocument};
use crate::output::{JsonlSink, RecordSink};
use crate::BrandweaveError;
use reqwest::Client;
use std::path::Path;
use url::Url;

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Pages fetched successfully
    pub pages_fetched: u64,

    /// Product records emitted
    pub products_extracted: u64,

    /// Manufacturer records emitted
    pub manufacturers_extracted: u64,

    /// Pages dropped: fetch failures plus extraction failures
    pub pages_failed: u64,
}

/// The extraction pipeline for one run
pub struct Pipeline {
    config: Config,
    origin: Url,
    client: Client,
    log: ProductLog,
    sink: JsonlSink,
    stats: RunStats,
}

impl Pipeline {
    /// Creates a pipeline: parses the site origin, builds the HTTP client,
    /// and opens the output channels
    pub fn new(config: Config) -> Result<Self, BrandweaveError> {
        let origin = Url::parse(&config.site.origin)?;
        let client = build_http_client(&config.user_agent, &config.fetcher)?;
        let sink = JsonlSink::open(&config.output)?;

        Ok(Self {
            config,
            origin,
            client,
            log: ProductLog::new(),
            sink,
            stats: RunStats::default(),
        })
    }

    /// Runs the pipeline to completion and returns the run counters
    ///
    /// A missing seed list is fatal. Fetch and extraction failures are
    /// page-local: they are logged, counted, and skipped. Sink failures
    /// abort the run.
    pub async fn run(mut self) -> Result<RunStats, BrandweaveError> {
        let seeds = load_seed_list(Path::new(&self.config.site.seed_list))?;
        let seed_count = seeds.len();
        let visits = order_seeds(seeds);

        tracing::info!(
            "Visiting {} classified pages ({} seeds supplied)",
            visits.len(),
            seed_count
        );

        for url in visits {
            match fetch_page(&self.client, &url).await {
                Ok(body) => {
                    self.stats.pages_fetched += 1;
                    self.process_page(&url, &body)?;
                }
                Err(error) => {
                    tracing::warn!(%url, %error, "fetch failed, skipping page");
                    self.stats.pages_failed += 1;
                }
            }
        }

        tracing::info!(
            "Run complete: {} pages fetched, {} products, {} manufacturers, {} failed",
            self.stats.pages_fetched,
            self.stats.products_extracted,
            self.stats.manufacturers_extracted,
            self.stats.pages_failed
        );

        Ok(self.stats)
    }

    /// Dispatches one fetched page to the matching extractor
    ///
    /// The sink write happens before the accumulator append, so a page
    /// either fully succeeds (record emitted and accumulated) or fully
    /// fails (neither).
    fn process_page(&mut self, url: &str, body: &str) -> Result<(), BrandweaveError> {
        let resolved = Url::parse(url)?;
        let doc = PageDocument::parse(resolved, body);

        match classify_url(url) {
            PageKind::Product => match extract_product(&doc) {
                Ok(record) => {
                    self.sink.record_product(&record)?;
                    self.log.append(record);
                    self.stats.products_extracted += 1;
                }
                Err(error) => {
                    tracing::warn!(%url, %error, "dropping product page");
                    self.stats.pages_failed += 1;
                }
            },
            PageKind::Manufacturer => {
                match extract_manufacturer(&doc, &self.log, &self.origin) {
                    Ok(record) => {
                        tracing::debug!(
                            manufacturer = %record.manufacturer,
                            products = record.product_count,
                            "cross-referenced manufacturer"
                        );
                        self.sink.record_manufacturer(&record)?;
                        self.stats.manufacturers_extracted += 1;
                    }
                    Err(error) => {
                        tracing::warn!(%url, %error, "dropping manufacturer page");
                        self.stats.pages_failed += 1;
                    }
                }
            }
            PageKind::Unclassified => {
                // order_seeds filters these out; keep the arm total anyway
                tracing::warn!(%url, "unclassified page reached the pipeline, skipping");
            }
        }

        Ok(())
    }
}
