//! Record sink trait and output errors

use crate::records::{ManufacturerRecord, ProductRecord};
use thiserror::Error;

/// Errors that can occur while persisting records
///
/// Unlike extraction failures these are not page-local: a sink that cannot
/// be written invalidates the whole run, so the pipeline propagates them.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Destination for emitted records
///
/// One call per successfully extracted page. Implementations append; they
/// never rewrite earlier records.
pub trait RecordSink {
    fn record_product(&mut self, record: &ProductRecord) -> OutputResult<()>;

    fn record_manufacturer(&mut self, record: &ManufacturerRecord) -> OutputResult<()>;
}
