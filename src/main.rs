//! Brandweave main entry point
//!
//! Command-line interface for the catalog extraction pipeline.

use brandweave::classify::{classify_url, order_seeds, PageKind};
use brandweave::config::load_config_with_hash;
use brandweave::BrandweaveError;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Brandweave: catalog extraction and cross-reference pipeline
///
/// Visits a seed list of catalog pages, product pages first, and emits one
/// JSON record per line for every product and manufacturer. Manufacturer
/// records carry aggregate rating and reliability scores computed from the
/// products extracted earlier in the run.
#[derive(Parser, Debug)]
#[command(name = "brandweave")]
#[command(version = "1.0.0")]
#[command(about = "Catalog extraction and cross-reference pipeline", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the visit plan without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        handle_run(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("brandweave=info,warn"),
            1 => EnvFilter::new("brandweave=debug,info"),
            2 => EnvFilter::new("brandweave=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles --dry-run: validates the seed list and shows the visit plan
fn handle_dry_run(config: &brandweave::config::Config) -> anyhow::Result<()> {
    use brandweave::classify::load_seed_list;
    use std::path::Path;

    println!("=== Brandweave Dry Run ===\n");

    println!("Site:");
    println!("  Origin: {}", config.site.origin);
    println!("  Seed list: {}", config.site.seed_list);

    println!("\nOutput:");
    println!("  Products: {}", config.output.products_path);
    println!("  Products (pretty): {}", config.output.products_pretty_path);
    println!("  Manufacturers: {}", config.output.manufacturers_path);
    println!(
        "  Manufacturers (pretty): {}",
        config.output.manufacturers_pretty_path
    );

    let seeds = load_seed_list(Path::new(&config.site.seed_list))?;
    let total = seeds.len();
    let visits = order_seeds(seeds);

    let products = visits
        .iter()
        .filter(|url| classify_url(url) == PageKind::Product)
        .count();
    let manufacturers = visits.len() - products;

    println!("\nVisit plan ({} of {} seeds classified):", visits.len(), total);
    for url in &visits {
        let tag = match classify_url(url) {
            PageKind::Product => "product",
            PageKind::Manufacturer => "manufacturer",
            PageKind::Unclassified => "unclassified",
        };
        println!("  [{}] {}", tag, url);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would visit {} product pages, then {} manufacturer pages",
        products, manufacturers
    );

    Ok(())
}

/// Handles the main extraction run
async fn handle_run(config: brandweave::config::Config) -> Result<(), BrandweaveError> {
    tracing::info!("Starting extraction run for {}", config.site.origin);

    match brandweave::crawler::run(config).await {
        Ok(stats) => {
            tracing::info!(
                "Extraction completed: {} products, {} manufacturers emitted",
                stats.products_extracted,
                stats.manufacturers_extracted
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Extraction failed: {}", e);
            Err(e)
        }
    }
}
