// ABOUTME: The Scraper orchestrator: fetch the listings page, extract records, write the CSV.
// ABOUTME: Logs extraction reports via tracing; the extractor itself stays pure and silent.

use std::path::PathBuf;

use crate::error::ScrapeError;
use crate::extractors::filter::InclusionRule;
use crate::extractors::listing::extract_html;
use crate::options::{Options, ScraperBuilder};
use crate::resource::{build_client, fetch_page};
use crate::result::{Extraction, ExtractionReport};
use crate::writer::save_to_csv;

/// How a scrape run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The fetch produced no content; nothing was extracted or written.
    NoContent,
    /// The page was parsed but yielded zero listings; nothing was written.
    NoListings,
    /// Records were written to `path`.
    Saved { path: PathBuf, rows: usize },
}

/// Scrapes one recruitment listings page into a CSV file.
#[derive(Debug, Clone)]
pub struct Scraper {
    opts: Options,
    http: reqwest::blocking::Client,
}

impl Scraper {
    /// Create a new Scraper with the given options.
    pub fn new(opts: Options) -> Result<Self, ScrapeError> {
        let http = build_client(&opts.user_agent, opts.timeout, opts.accept_invalid_certs)?;
        Ok(Self { opts, http })
    }

    /// Create a ScraperBuilder for configuring a Scraper.
    pub fn builder() -> ScraperBuilder {
        ScraperBuilder::new()
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Fetch the listings page, or `None` if the fetch failed.
    pub fn fetch(&self) -> Option<String> {
        fetch_page(&self.http, &self.opts.listings_url)
    }

    /// Extract listings from already-fetched markup.
    pub fn extract_html(&self, html: &str) -> Extraction {
        let extraction = extract_html(html, &self.opts.extract);
        log_report(&extraction.report, extraction.len());
        extraction
    }

    /// Fetch, extract and save in one go.
    pub fn run(&self) -> Result<RunOutcome, ScrapeError> {
        self.run_with(|_| {})
    }

    /// Like [`Scraper::run`], handing the extraction to `inspect` before it is saved.
    pub fn run_with<F>(&self, inspect: F) -> Result<RunOutcome, ScrapeError>
    where
        F: FnOnce(&Extraction),
    {
        let Some(html) = self.fetch() else {
            tracing::error!("failed to fetch recruitment page, exiting");
            return Ok(RunOutcome::NoContent);
        };
        self.run_html_with(&html, inspect)
    }

    /// Extract from `html` and save, skipping the fetch.
    pub fn run_html(&self, html: &str) -> Result<RunOutcome, ScrapeError> {
        self.run_html_with(html, |_| {})
    }

    /// Like [`Scraper::run_html`], handing the extraction to `inspect` before it is saved.
    pub fn run_html_with<F>(&self, html: &str, inspect: F) -> Result<RunOutcome, ScrapeError>
    where
        F: FnOnce(&Extraction),
    {
        let extraction = self.extract_html(html);
        inspect(&extraction);
        self.save(&extraction)
    }

    /// Write an extraction's records to a timestamped CSV file.
    pub fn save(&self, extraction: &Extraction) -> Result<RunOutcome, ScrapeError> {
        if extraction.is_empty() {
            tracing::warn!("no job listings found on page; selectors may need adjusting");
            return Ok(RunOutcome::NoListings);
        }
        match save_to_csv(&extraction.records, &self.opts.out_dir, &self.opts.file_prefix)? {
            Some(path) => Ok(RunOutcome::Saved {
                path,
                rows: extraction.len(),
            }),
            None => Ok(RunOutcome::NoListings),
        }
    }
}

fn log_report(report: &ExtractionReport, records: usize) {
    if report.container_fallback {
        tracing::debug!("no listing containers matched, scanning main/body instead");
    }
    if report.used_pdf_fallback {
        tracing::debug!("no anchors accepted, fell back to PDF links");
    }
    tracing::debug!(
        containers = report.containers,
        anchors = report.anchors,
        accepted = report.accepted,
        rejected = report.rejected,
        unresolved = report.unresolved,
        duplicates = report.duplicates_dropped,
        "extraction report"
    );
    for rule in InclusionRule::all() {
        let hits = report.admitted_by(rule);
        if hits > 0 {
            tracing::debug!(rule = %rule, hits, "admitted by rule");
        }
    }
    tracing::info!(entries = records, "parsed listings");
}
