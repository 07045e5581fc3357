//! Crawler module: fetching and pipeline orchestration
//!
//! The fetch layer here is intentionally minimal (one GET per page). The
//! interesting part is the pipeline, which enforces the visit order and
//! wires extraction, accumulation, and output together.

mod fetcher;
mod pipeline;

pub use fetcher::{build_http_client, fetch_page};
pub use pipeline::{Pipeline, RunStats};

use crate::config::Config;
use crate::BrandweaveError;

/// Runs a complete extraction pass over the configured seed list
///
/// This is the main entry point: it loads and orders the seeds, visits
/// every classified page, and emits product and manufacturer records to the
/// configured JSONL channels.
pub async fn run(config: Config) -> Result<RunStats, BrandweaveError> {
    Pipeline::new(config)?.run().await
}
