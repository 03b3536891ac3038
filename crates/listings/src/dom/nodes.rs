// ABOUTME: Explicit accessor functions for element names, class tokens, href targets and text.
// ABOUTME: Absent attributes map to None; nodes without readable text map to an empty string.

use scraper::{ElementRef, Node};

/// Elements whose text children are never visible page text.
const NON_TEXT_PARENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Returns the lowercase-as-parsed tag name if `node` is an element.
pub fn element_name<'a>(node: ego_tree::NodeRef<'a, Node>) -> Option<&'a str> {
    node.value().as_element().map(|el| el.name())
}

/// Iterates the whitespace-separated tokens of the `class` attribute.
///
/// Yields nothing when the attribute is missing or blank.
pub fn class_tokens<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    el.value()
        .attr("class")
        .into_iter()
        .flat_map(str::split_whitespace)
}

/// Returns the raw, untrimmed `href` attribute.
pub fn href<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.value().attr("href")
}

/// Flattens all text below `node` (inclusive) into a single line.
///
/// Text nodes are split on whitespace and the pieces joined with one space,
/// so adjacent inline elements never glue words together. Text inside
/// script-like elements is skipped; comments and doctypes contribute nothing.
pub fn flattened_text(node: ego_tree::NodeRef<'_, Node>) -> String {
    let mut words: Vec<&str> = Vec::new();
    for descendant in node.descendants() {
        let Node::Text(text) = descendant.value() else {
            continue;
        };
        let hidden = descendant
            .parent()
            .and_then(element_name)
            .is_some_and(|name| NON_TEXT_PARENTS.contains(&name));
        if hidden {
            continue;
        }
        words.extend(text.split_whitespace());
    }
    words.join(" ")
}

/// Visible text of an element, normalized the same way as [`flattened_text`].
pub fn visible_text(el: ElementRef<'_>) -> String {
    flattened_text(*el)
}
