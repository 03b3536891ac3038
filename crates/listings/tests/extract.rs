// ABOUTME: Integration tests for listing extraction over whole pages.
// ABOUTME: Covers the documented scenarios, a realistic fixture page and malformed markup.

use pretty_assertions::assert_eq;
use recruitscan_listings::extractors::containers::select_containers;
use recruitscan_listings::{
    dedup_by_link, extract_html, extract_listings, ExtractOptions, InclusionRule, ListingRecord,
};
use scraper::Html;
use std::collections::HashSet;
use std::fs;

fn load_html_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}.html", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path, e))
}

fn record(title: &str, location: &str, post_date: &str, link: &str) -> ListingRecord {
    ListingRecord {
        title: title.to_string(),
        location: location.to_string(),
        post_date: post_date.to_string(),
        link: link.to_string(),
    }
}

#[test]
fn recruitment_list_with_location_and_date() {
    let html = r#"<div class="recruitment-list"><a href="/job1">Recruitment Notice</a> Location: Mumbai 12-Jan-2024</div>"#;
    let extraction = extract_html(html, &ExtractOptions::default());
    assert_eq!(
        extraction.records,
        vec![record(
            "Recruitment Notice",
            "Location: Mumbai",
            "12-Jan-2024",
            "https://www.ibps.in/job1"
        )]
    );
}

#[test]
fn lone_document_link_without_containers() {
    let html = r#"<html><body><p>Latest</p><a href="/notice.pdf">Download</a></body></html>"#;
    let extraction = extract_html(html, &ExtractOptions::default());

    assert!(extraction.report.container_fallback);
    assert_eq!(
        extraction.records,
        vec![record("Download", "", "", "https://www.ibps.in/notice.pdf")]
    );
}

#[test]
fn same_target_different_text_keeps_first() {
    let html = r#"<body><ul class="notice-list">
        <li><a href="/crp/clerk">Clerk Recruitment 2024</a></li>
        <li><a href="/crp/clerk">Apply for Clerk posts</a></li>
    </ul></body>"#;
    let extraction = extract_html(html, &ExtractOptions::default());

    assert_eq!(extraction.len(), 1);
    assert_eq!(extraction.records[0].title, "Clerk Recruitment 2024");
    assert_eq!(extraction.report.duplicates_dropped, 1);
}

#[test]
fn realistic_recruitment_page() {
    let html = load_html_fixture("recruitment");
    let extraction = extract_html(&html, &ExtractOptions::default());

    assert_eq!(
        extraction.records,
        vec![
            record(
                "Detailed Notification CRP PO/MT-XIV",
                "Location: New Delhi",
                "31-Jul-2024",
                "https://www.ibps.in/wp-content/uploads/CRP_PO_XIV_Notification.pdf",
            ),
            record(
                "Common Recruitment Process for Clerks",
                "",
                "August 1, 2024",
                "https://www.ibps.in/index.php/crp-clerks-xiv/",
            ),
            record(
                "Click here to Apply Online",
                "Location: New Delhi",
                "",
                "https://ibpsonline.ibps.in/crpcl14jun24/",
            ),
            record(
                "Common Recruitment Process for Clerks",
                "Lucknow Region",
                "",
                "https://www.ibps.in/index.php/crp-clerks-xiv/?lang=hi",
            ),
            record(
                "IBPS Notice",
                "Lucknow Region",
                "",
                "https://www.ibps.in/downloads/RRB_Advt.DOCX",
            ),
        ]
    );

    let report = extraction.report;
    assert_eq!(report.containers, 3);
    assert!(!report.container_fallback);
    assert_eq!(report.anchors, 6);
    assert_eq!(report.accepted, 5);
    assert_eq!(report.rejected, 1);
    assert_eq!(report.admitted_by(InclusionRule::KeywordText), 4);
    assert_eq!(report.admitted_by(InclusionRule::DocumentExtension), 1);
    assert!(!report.used_pdf_fallback);
}

#[test]
fn extraction_is_deterministic() {
    let html = load_html_fixture("recruitment");
    let doc = Html::parse_document(&html);
    let opts = ExtractOptions::default();

    let first = extract_listings(&doc, &opts);
    let second = extract_listings(&doc, &opts);
    assert_eq!(first.records, second.records);
    assert_eq!(first.report, second.report);
}

#[test]
fn links_are_unique_and_absolute() {
    let html = r#"<body><div class="careers">
        <a href="/a.pdf">A</a><a href="a.pdf">A again</a>
        <a href="https://www.ibps.in/a.pdf">A absolute</a>
        <a href="./b.pdf">B</a>
    </div></body>"#;
    let extraction = extract_html(html, &ExtractOptions::default());

    let links: Vec<&str> = extraction.records.iter().map(|r| r.link.as_str()).collect();
    assert_eq!(links, vec!["https://www.ibps.in/a.pdf", "https://www.ibps.in/b.pdf"]);

    let unique: HashSet<&str> = links.iter().copied().collect();
    assert_eq!(unique.len(), links.len());
    for link in links {
        assert!(url::Url::parse(link).is_ok());
    }
    assert_eq!(dedup_by_link(extraction.records.clone()), extraction.records);
}

#[test]
fn malformed_markup_degrades_gracefully() {
    let inputs = [
        "",
        "<<<<",
        "<div class='notice'><a href='/x.pdf'>Notice <b>unclosed",
        "<table><tbody class=\"vacancy\"><a href=\"/v\">Vacancy</a></table>",
        "<a href>empty target</a><a href=\"\"></a>",
        "<!-- only a comment -->",
    ];
    for html in inputs {
        let doc = Html::parse_document(html);
        assert!(!select_containers(&doc).nodes.is_empty(), "input {:?}", html);
        let extraction = extract_listings(&doc, &ExtractOptions::default());
        for record in &extraction.records {
            assert!(!record.title.is_empty());
            assert!(url::Url::parse(&record.link).is_ok());
        }
    }
}

#[test]
fn custom_base_url_and_placeholders() {
    let mut opts = ExtractOptions::with_base_url("https://careers.example.com/jobs/").unwrap();
    opts.title_placeholder = "Untitled listing".to_string();

    let html = r#"<section class="vacancy-list"><a href="2024/engineer.pdf"></a></section>"#;
    let extraction = extract_html(html, &opts);
    assert_eq!(
        extraction.records,
        vec![record(
            "Untitled listing",
            "",
            "",
            "https://careers.example.com/jobs/2024/engineer.pdf"
        )]
    );
}
