// ABOUTME: Infers a post date and a location for an anchor from the text of nearby nodes.
// ABOUTME: Context is the parent, then 3 elements forward, then 3 backward in document order.

//! Field inference around a listing anchor.
//!
//! The neighbourhood of an anchor is built from its parent `P`:
//! `[P, next₁(P), next₂(P), next₃(P), prev₁(P), prev₂(P), prev₃(P)]`,
//! using the walks in [`crate::dom::traverse`]. Date and location are two
//! independent scans over that list; each stops at the first node whose
//! flattened text matches.

use ego_tree::NodeRef;
use scraper::Node;

use crate::dom::{flattened_text, next_elements, previous_elements};
use crate::extractors::anchors::AnchorCandidate;
use crate::patterns::{find_date, find_location};

/// How many elements to look at on each side of the anchor's parent.
pub const CONTEXT_RADIUS: usize = 3;

/// Date and location guessed for one anchor; empty when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferredFields {
    pub date: String,
    pub location: String,
}

/// The ordered neighbourhood searched for an anchor's fields.
pub fn context_nodes<'a>(anchor: &AnchorCandidate<'a>) -> Vec<NodeRef<'a, Node>> {
    let Some(parent) = anchor.element.parent() else {
        return Vec::new();
    };

    let mut nodes = Vec::with_capacity(1 + 2 * CONTEXT_RADIUS);
    nodes.push(parent);
    nodes.extend(next_elements(parent, CONTEXT_RADIUS).into_iter().map(|el| *el));
    nodes.extend(previous_elements(parent, CONTEXT_RADIUS).into_iter().map(|el| *el));
    nodes
}

/// Scans the anchor's neighbourhood for a date and a location.
pub fn infer_fields(anchor: &AnchorCandidate<'_>) -> InferredFields {
    let texts: Vec<String> = context_nodes(anchor)
        .into_iter()
        .map(flattened_text)
        .collect();

    InferredFields {
        date: first_match(&texts, find_date),
        location: first_match(&texts, find_location),
    }
}

fn first_match(texts: &[String], matcher: fn(&str) -> Option<&str>) -> String {
    texts
        .iter()
        .find_map(|text| matcher(text.as_str()))
        .map(str::to_string)
        .unwrap_or_default()
}
