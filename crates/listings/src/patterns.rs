// ABOUTME: Compiled text patterns recognizing dates, locations and recruitment keywords.
// ABOUTME: Matchers operate on flattened node text and return the matched slice, if any.

use once_cell::sync::Lazy;
use regex::Regex;

// `12-Jan-2024`, `5/03/24`, `01 Feb 2023` or `March 5, 2024`.
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(\d{1,2}[ \-/][A-Za-z0-9]{1,3}[ \-/]\d{2,4})\b|\b([A-Za-z]{3,9}\s+\d{1,2},\s*\d{4})\b",
    )
    .unwrap()
});

// `Location: Mumbai` or a capitalised phrase such as `Pune District`.
static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(Location[:\s]*[A-Za-z,\s\-]+)|([A-Za-z\s]+(?:District|State|Region|City|Town))")
        .unwrap()
});

static RECRUITMENT_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(recruit|apply|notification|advertisement|vacancy|register|click here|recruitment|notice)",
    )
    .unwrap()
});

/// Returns the first date-like substring of `text`.
pub fn find_date(text: &str) -> Option<&str> {
    DATE_RE.find(text).map(|m| m.as_str())
}

/// Returns the first location-like substring of `text`, trimmed.
pub fn find_location(text: &str) -> Option<&str> {
    LOCATION_RE
        .find(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

/// True when `text` carries one of the recruitment keywords, in any case.
pub fn is_recruitment_text(text: &str) -> bool {
    RECRUITMENT_KEYWORD_RE.is_match(text)
}
