//! # THN Scraper
//!
//! Fetches the front page of The Hacker News, extracts every article
//! listed there and prints them to stdout as a single-line JSON array.
//!
//! ## Output
//!
//! Each array element carries `title`, `summary`, `url`, `date`, `tags`
//! and `image_url`. With `--keyword` set, `alert` and `matched_keywords`
//! are added. A failed fetch prints `[]`; the process still exits 0.
//!
//! ## Usage
//!
//! ```sh
//! thn_scraper > articles.json
//! RUST_LOG=debug thn_scraper -k lazarus
//! ```
//!
//! ## Pipeline
//!
//! 1. **Fetch**: one GET with a browser user agent and a 10s timeout
//! 2. **Parse**: pick article blocks and their fields out of the markup
//! 3. **Classify**: tag articles from a fixed cybersecurity vocabulary
//! 4. **Output**: serialize to JSON on stdout; diagnostics go to stderr

use clap::Parser;
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod alerts;
mod cli;
mod config;
mod dates;
mod dom;
mod error;
mod models;
mod outputs;
mod scrapers;
mod tags;
mod utils;

use cli::Cli;
use config::ScrapeConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init (stderr only; stdout carries the JSON) ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(keywords = ?args.keywords, "Parsed CLI arguments");

    let config = ScrapeConfig::default().with_keywords(args.keywords);
    info!(url = %config.url, timeout = ?config.timeout, "thn_scraper starting up");

    let json = scrapers::thehackernews::scrape(&config).await;
    println!("{json}");

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}
