// ABOUTME: Selects document regions likely to hold listings by class-name keyword heuristics.
// ABOUTME: Falls back to <main>, then <body>, then the root element so the scope is never empty.

use scraper::{ElementRef, Html, Selector};

use crate::dom::{class_tokens, element_name};

/// Class-name fragments that mark a listing region.
pub const CONTAINER_KEYWORDS: &[&str] = &[
    "recruit",
    "career",
    "notice",
    "vacancy",
    "advertisement",
    "notification",
];

/// Block, list and table-body elements considered as containers.
pub const CONTAINER_TAGS: &[&str] = &["div", "section", "ul", "tbody"];

/// The regions to search for anchors.
#[derive(Debug, Clone)]
pub struct ContainerSelection<'a> {
    /// Selected regions in document order; never empty.
    pub nodes: Vec<ElementRef<'a>>,
    /// True when no keyword container existed and a fallback region was used.
    pub fell_back: bool,
}

/// True when one of `el`'s class tokens contains a container keyword.
pub fn has_listing_class(el: ElementRef<'_>) -> bool {
    class_tokens(el).any(|token| {
        let token = token.to_lowercase();
        CONTAINER_KEYWORDS.iter().any(|kw| token.contains(kw))
    })
}

fn is_structural(el: ElementRef<'_>) -> bool {
    element_name(*el).is_some_and(|name| CONTAINER_TAGS.contains(&name))
}

/// Picks the containers for `doc`.
///
/// Walking the tree once in document order gives the union over all
/// keywords with no duplicates. Nested matches are all kept; anchors found
/// twice are collapsed later by the anchor dedup.
pub fn select_containers(doc: &Html) -> ContainerSelection<'_> {
    let nodes: Vec<ElementRef<'_>> = doc
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| is_structural(*el) && has_listing_class(*el))
        .collect();

    if !nodes.is_empty() {
        return ContainerSelection {
            nodes,
            fell_back: false,
        };
    }

    ContainerSelection {
        nodes: vec![fallback_region(doc)],
        fell_back: true,
    }
}

fn fallback_region(doc: &Html) -> ElementRef<'_> {
    for css in ["main", "body"] {
        if let Ok(selector) = Selector::parse(css) {
            if let Some(el) = doc.select(&selector).next() {
                return el;
            }
        }
    }
    doc.root_element()
}
