// ABOUTME: ListingRecord output rows plus the Extraction bundle returned by the extractor.
// ABOUTME: ExtractionReport carries per-run counters so callers can log without ambient state.

use serde::{Deserialize, Serialize};

use crate::extractors::filter::InclusionRule;

/// One structured listing row.
///
/// Field order is the CSV column order: `title, location, post_date, link`.
/// `link` is always an absolute URL and unique within one [`Extraction`];
/// `title` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub title: String,
    pub location: String,
    pub post_date: String,
    pub link: String,
}

/// Counters describing how a single extraction went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractionReport {
    /// Number of container regions scanned.
    pub containers: usize,
    /// True when no keyword container matched and the main/body/root fallback was used.
    pub container_fallback: bool,
    /// Unique anchors collected from the containers.
    pub anchors: usize,
    /// Anchors admitted by the inclusion filter.
    pub accepted: usize,
    /// Accepted anchors per admitting rule, indexed by [`InclusionRule::index`].
    pub rule_hits: [usize; InclusionRule::COUNT],
    /// Anchors discarded by the inclusion filter.
    pub rejected: usize,
    /// Anchors whose target could not be resolved to an absolute URL.
    pub unresolved: usize,
    /// True when the primary heuristics yielded nothing and the PDF sweep ran.
    pub used_pdf_fallback: bool,
    /// Records dropped by the final link dedup.
    pub duplicates_dropped: usize,
}

impl ExtractionReport {
    /// How many accepted anchors `rule` admitted.
    pub fn admitted_by(&self, rule: InclusionRule) -> usize {
        self.rule_hits[rule.index()]
    }
}

/// The ordered result set of one extraction run, with its report.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub records: Vec<ListingRecord>,
    pub report: ExtractionReport,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Consumes the extraction, handing the records to the caller.
    pub fn into_records(self) -> Vec<ListingRecord> {
        self.records
    }
}
