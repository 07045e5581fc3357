//! Output module: persistence of emitted records
//!
//! Records leave the pipeline through a [`RecordSink`]. The shipped
//! implementation writes line-delimited JSON in two channels per record
//! kind (compact and pretty-printed).

mod jsonl;
mod traits;

pub use jsonl::JsonlSink;
pub use traits::{OutputError, OutputResult, RecordSink};
