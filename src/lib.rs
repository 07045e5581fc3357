//! Brandweave: catalog extraction and cross-reference pipeline
//!
//! This crate extracts structured product and manufacturer records from a
//! retailer's catalog pages and links them into a manufacturer-centric
//! dataset with derived quality metrics. Product pages are visited first and
//! accumulated; manufacturer pages then join against that accumulator to
//! compute aggregate rating and reliability scores.

pub mod accumulator;
pub mod classify;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod metrics;
pub mod output;
pub mod records;

use thiserror::Error;

/// Main error type for Brandweave operations
#[derive(Debug, Error)]
pub enum BrandweaveError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read seed list {path}: {source}")]
    SeedList {
        path: String,
        source: std::io::Error,
    },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Brandweave operations
pub type Result<T> = std::result::Result<T, BrandweaveError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use accumulator::ProductLog;
pub use classify::{classify_url, order_seeds, PageKind};
pub use config::Config;
pub use extract::{ExtractError, PageDocument};
pub use records::{ManufacturerRecord, ProductRecord};
