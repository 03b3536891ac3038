// ABOUTME: Wires container selection, anchor collection, filtering and field inference together.
// ABOUTME: Runs the PDF fallback when nothing is accepted and dedups final records by link.

use std::collections::HashSet;

use scraper::Html;
use url::Url;

use crate::extractors::anchors::{anchors_in, collect_anchors, AnchorCandidate};
use crate::extractors::containers::select_containers;
use crate::extractors::fields::infer_fields;
use crate::extractors::filter::admit;
use crate::options::ExtractOptions;
use crate::result::{Extraction, ExtractionReport, ListingRecord};

/// Parses `html` and extracts its listings.
pub fn extract_html(html: &str, opts: &ExtractOptions) -> Extraction {
    let doc = Html::parse_document(html);
    extract_listings(&doc, opts)
}

/// Extracts listing records from a parsed document.
///
/// Never fails: malformed markup has already been repaired by the parser,
/// and every stage treats missing attributes or text as empty.
pub fn extract_listings(doc: &Html, opts: &ExtractOptions) -> Extraction {
    let mut report = ExtractionReport::default();

    let selection = select_containers(doc);
    report.containers = selection.nodes.len();
    report.container_fallback = selection.fell_back;

    let anchors = collect_anchors(&selection.nodes);
    report.anchors = anchors.len();

    let mut records = Vec::new();
    for anchor in &anchors {
        let Some(rule) = admit(anchor, opts) else {
            report.rejected += 1;
            continue;
        };
        let Some(link) = resolve_link(&opts.base_url, anchor.raw_target) else {
            report.unresolved += 1;
            continue;
        };
        report.accepted += 1;
        report.rule_hits[rule.index()] += 1;

        let fields = infer_fields(anchor);
        records.push(ListingRecord {
            title: title_or(anchor, &opts.title_placeholder),
            location: fields.location,
            post_date: fields.date,
            link,
        });
    }

    if records.is_empty() {
        report.used_pdf_fallback = true;
        records = pdf_fallback(doc, opts, &mut report);
    }

    let before = records.len();
    let records = dedup_by_link(records);
    report.duplicates_dropped = before - records.len();

    Extraction { records, report }
}

/// Every `.pdf` link in the whole document, with empty location and date.
fn pdf_fallback(
    doc: &Html,
    opts: &ExtractOptions,
    report: &mut ExtractionReport,
) -> Vec<ListingRecord> {
    let mut records = Vec::new();
    for anchor in anchors_in(doc.root_element()) {
        if !anchor.raw_target.to_lowercase().ends_with(".pdf") {
            continue;
        }
        let Some(link) = resolve_link(&opts.base_url, anchor.raw_target) else {
            report.unresolved += 1;
            continue;
        };
        records.push(ListingRecord {
            title: title_or(&anchor, &opts.pdf_title_placeholder),
            location: String::new(),
            post_date: String::new(),
            link,
        });
    }
    records
}

fn title_or(anchor: &AnchorCandidate<'_>, placeholder: &str) -> String {
    if anchor.visible_text.is_empty() {
        placeholder.to_string()
    } else {
        anchor.visible_text.clone()
    }
}

/// Resolves a raw `href` against `base` into an absolute URL string.
pub fn resolve_link(base: &Url, raw_target: &str) -> Option<String> {
    base.join(raw_target).ok().map(String::from)
}

/// Keeps the first record for each link, preserving order.
pub fn dedup_by_link(records: Vec<ListingRecord>) -> Vec<ListingRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.link.clone()))
        .collect()
}
