// ABOUTME: CLI for scraping a recruitment listings page into a timestamped CSV file.
// ABOUTME: Fetches the page (or reads --html), extracts listings, writes CSV and optionally JSON.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use recruitscan_listings::options::{
    DEFAULT_BASE_URL, DEFAULT_FILE_PREFIX, DEFAULT_LISTINGS_URL, DEFAULT_OUT_DIR,
};
use recruitscan_listings::{Extraction, RunOutcome, Scraper};
use tracing_subscriber::EnvFilter;

/// Scrape job listings (title, location, post date, link) from a recruitment page.
#[derive(Parser, Debug)]
#[command(name = "recruitscan")]
#[command(about = "Extract job listings from a recruitment page into CSV", long_about = None)]
struct Args {
    /// Listings page to fetch.
    #[arg(long, default_value = DEFAULT_LISTINGS_URL)]
    url: String,

    /// Base URL relative links are resolved against.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Parse this HTML file instead of fetching --url.
    #[arg(long)]
    html: Option<PathBuf>,

    /// Directory the CSV file is written to.
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// File name prefix for the CSV file.
    #[arg(long, default_value = DEFAULT_FILE_PREFIX)]
    prefix: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Verify TLS certificates (off by default).
    #[arg(long, default_value_t = false)]
    verify_tls: bool,

    /// Also print the records to stdout as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init (e.g. in tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<()> {
    let scraper = Scraper::builder()
        .listings_url(&args.url)
        .base_url(&args.base_url)
        .out_dir(&args.out_dir)
        .file_prefix(&args.prefix)
        .timeout(Duration::from_secs(args.timeout))
        .verify_tls(args.verify_tls)
        .build()?;

    let mut printed = Ok(());
    let print_json = |extraction: &Extraction| {
        if args.json {
            printed = serde_json::to_string_pretty(&extraction.records)
                .map(|json| println!("{}", json));
        }
    };

    let outcome = match &args.html {
        Some(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("reading HTML file {}", path.display()))?;
            scraper.run_html_with(&html, print_json)?
        }
        None => scraper.run_with(print_json)?,
    };
    printed.context("printing records as JSON")?;

    if let RunOutcome::Saved { path, rows } = outcome {
        tracing::debug!(rows, path = %path.display(), "run complete");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::from(1)
        }
    }
}
