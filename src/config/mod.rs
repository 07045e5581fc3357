//! Configuration module for Brandweave
//!
//! Handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use brandweave::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Seed list: {}", config.site.seed_list);
//! ```

mod parser;
mod types;
mod validation;

pub use types::{Config, FetcherConfig, OutputConfig, SiteConfig, UserAgentConfig};

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
