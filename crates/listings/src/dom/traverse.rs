// ABOUTME: Forward and backward document-order walks used to find text near an anchor.
// ABOUTME: Only element nodes are yielded; text, comment and document nodes are stepped over.

//! Document-order neighbour traversal.
//!
//! Document order is the pre-order of the tree: a node comes before its
//! children, and its children come before its next sibling. From a node `n`:
//!
//! - walking *forward* visits `n`'s own descendants first, then everything
//!   after `n` (its following siblings and their subtrees, then the
//!   following siblings of its ancestors, and so on);
//! - walking *backward* visits the subtree of the previous sibling from its
//!   deepest last descendant upwards, then the parent, so every ancestor of
//!   `n` is eventually visited.
//!
//! `n` itself is never part of either walk.

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

fn next_in_order(node: NodeRef<'_, Node>) -> Option<NodeRef<'_, Node>> {
    if let Some(child) = node.first_child() {
        return Some(child);
    }
    let mut current = Some(node);
    while let Some(n) = current {
        if let Some(sibling) = n.next_sibling() {
            return Some(sibling);
        }
        current = n.parent();
    }
    None
}

fn prev_in_order(node: NodeRef<'_, Node>) -> Option<NodeRef<'_, Node>> {
    match node.prev_sibling() {
        Some(mut sibling) => {
            while let Some(last) = sibling.last_child() {
                sibling = last;
            }
            Some(sibling)
        }
        None => node.parent(),
    }
}

/// Up to `limit` elements following `node` in document order.
pub fn next_elements(node: NodeRef<'_, Node>, limit: usize) -> Vec<ElementRef<'_>> {
    std::iter::successors(next_in_order(node), |n| next_in_order(*n))
        .filter_map(ElementRef::wrap)
        .take(limit)
        .collect()
}

/// Up to `limit` elements preceding `node`, nearest first.
pub fn previous_elements(node: NodeRef<'_, Node>, limit: usize) -> Vec<ElementRef<'_>> {
    std::iter::successors(prev_in_order(node), |n| prev_in_order(*n))
        .filter_map(ElementRef::wrap)
        .take(limit)
        .collect()
}
