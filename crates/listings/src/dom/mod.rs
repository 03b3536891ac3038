// ABOUTME: DOM access and traversal utilities over scraper's parsed document tree.
// ABOUTME: Groups attribute accessors, text flattening, and document-order neighbour walks.

//! DOM utilities for listing extraction.
//!
//! The extractor never looks at raw attributes or raw node kinds directly.
//! Everything goes through the accessors in [`nodes`], where an absent
//! attribute or an uninterpretable node is an ordinary `None` / empty string,
//! and through [`traverse`], which fixes what "nearby" means in terms of
//! document order.

pub mod nodes;
pub mod traverse;

pub use nodes::{class_tokens, element_name, flattened_text, href, visible_text};
pub use traverse::{next_elements, previous_elements};
