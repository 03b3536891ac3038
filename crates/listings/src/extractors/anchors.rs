// ABOUTME: Collects hyperlink candidates inside the selected containers.
// ABOUTME: Dedups by (visible text, raw href) across containers; the first occurrence wins.

use std::collections::HashSet;

use scraper::{ElementRef, Selector};

use crate::dom::{href, visible_text};

/// A hyperlink that may turn into a listing.
#[derive(Debug, Clone)]
pub struct AnchorCandidate<'a> {
    pub element: ElementRef<'a>,
    /// Whitespace-normalized link text; may be empty.
    pub visible_text: String,
    /// The `href` attribute exactly as written in the markup.
    pub raw_target: &'a str,
}

impl<'a> AnchorCandidate<'a> {
    /// Builds a candidate from an `<a>` element, or `None` if it has no `href`.
    pub fn from_element(element: ElementRef<'a>) -> Option<Self> {
        let raw_target = href(element)?;
        Some(Self {
            element,
            visible_text: visible_text(element),
            raw_target,
        })
    }
}

/// All `<a href>` elements below `scope`, in document order.
pub fn anchors_in(scope: ElementRef<'_>) -> Vec<AnchorCandidate<'_>> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };
    scope
        .select(&selector)
        .filter_map(AnchorCandidate::from_element)
        .collect()
}

/// Gathers anchors from every container, keeping the first of each
/// (visible text, raw target) pair.
pub fn collect_anchors<'a>(containers: &[ElementRef<'a>]) -> Vec<AnchorCandidate<'a>> {
    let mut seen: HashSet<(String, &'a str)> = HashSet::new();
    let mut unique = Vec::new();

    for container in containers {
        for anchor in anchors_in(*container) {
            if seen.insert((anchor.visible_text.clone(), anchor.raw_target)) {
                unique.push(anchor);
            }
        }
    }

    unique
}
