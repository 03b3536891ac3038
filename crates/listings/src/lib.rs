// ABOUTME: Main library entry point for the recruitment listings scraper.
// ABOUTME: Re-exports the public API: Scraper, ScraperBuilder, extract functions, records and errors.

//! Recruitscan - heuristic extraction of job listings from a recruitment page.
//!
//! The page's markup is unknown ahead of time, so nothing here is
//! site-specific: class-name keywords pick likely regions, link text and
//! targets decide which anchors are listings, and regexes pull dates and
//! locations out of nearby text.
//!
//! # Example
//!
//! ```
//! use recruitscan_listings::{extract_html, ExtractOptions};
//!
//! let html = r#"<div class="recruitment-list">
//!     <a href="/job1">Recruitment Notice</a> Location: Mumbai 12-Jan-2024
//! </div>"#;
//! let extraction = extract_html(html, &ExtractOptions::default());
//! let record = &extraction.records[0];
//! assert_eq!(record.title, "Recruitment Notice");
//! assert_eq!(record.post_date, "12-Jan-2024");
//! assert_eq!(record.link, "https://www.ibps.in/job1");
//! ```

pub mod client;
pub mod dom;
pub mod error;
pub mod extractors;
pub mod options;
pub mod patterns;
pub mod resource;
pub mod result;
pub mod writer;

pub use crate::client::{RunOutcome, Scraper};
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::extractors::filter::InclusionRule;
pub use crate::extractors::listing::{dedup_by_link, extract_html, extract_listings};
pub use crate::options::{ExtractOptions, Options, ScraperBuilder};
pub use crate::result::{Extraction, ExtractionReport, ListingRecord};
pub use crate::writer::save_to_csv;
