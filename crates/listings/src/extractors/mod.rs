// ABOUTME: Heuristic listing extraction: containers, anchors, field inference and filtering.
// ABOUTME: Each stage is a separate pass over the parsed document.

//! Listing extraction module.
//!
//! The pipeline, in order:
//! - `containers`: pick document regions whose class names suggest listings.
//! - `anchors`: collect and dedup hyperlinks inside those regions.
//! - `fields`: infer a date and a location from text around each anchor.
//! - `filter`: decide which anchors are listings.
//! - `listing`: wire the passes together, run the PDF fallback and dedup by link.

pub mod anchors;
pub mod containers;
pub mod fields;
pub mod filter;
pub mod listing;
