//! Line-delimited JSON sink
//!
//! Each record kind goes to two append-mode channels: a compact one-line
//! form for downstream tooling and a pretty-printed form for humans. Every
//! write is newline-terminated UTF-8 and flushed, so an interrupted run
//! keeps everything already emitted.

use crate::config::OutputConfig;
use crate::output::traits::{OutputResult, RecordSink};
use crate::records::{ManufacturerRecord, ProductRecord};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// A compact + pretty writer pair for one record kind
struct DualChannel {
    compact: BufWriter<File>,
    pretty: BufWriter<File>,
}

impl DualChannel {
    fn open(compact_path: &str, pretty_path: &str) -> OutputResult<Self> {
        Ok(Self {
            compact: append_writer(Path::new(compact_path))?,
            pretty: append_writer(Path::new(pretty_path))?,
        })
    }

    fn write<T: Serialize>(&mut self, record: &T) -> OutputResult<()> {
        serde_json::to_writer(&mut self.compact, record)?;
        self.compact.write_all(b"\n")?;
        self.compact.flush()?;

        serde_json::to_writer_pretty(&mut self.pretty, record)?;
        self.pretty.write_all(b"\n")?;
        self.pretty.flush()?;

        Ok(())
    }
}

fn append_writer(path: &Path) -> OutputResult<BufWriter<File>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(BufWriter::new(file))
}

/// JSONL sink writing products and manufacturers to their configured paths
pub struct JsonlSink {
    products: DualChannel,
    manufacturers: DualChannel,
}

impl JsonlSink {
    /// Opens all four output channels in append mode, creating missing files
    pub fn open(config: &OutputConfig) -> OutputResult<Self> {
        Ok(Self {
            products: DualChannel::open(&config.products_path, &config.products_pretty_path)?,
            manufacturers: DualChannel::open(
                &config.manufacturers_path,
                &config.manufacturers_pretty_path,
            )?,
        })
    }
}

impl RecordSink for JsonlSink {
    fn record_product(&mut self, record: &ProductRecord) -> OutputResult<()> {
        self.products.write(record)
    }

    fn record_manufacturer(&mut self, record: &ManufacturerRecord) -> OutputResult<()> {
        self.manufacturers.write(record)
    }
}
