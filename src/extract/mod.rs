// src/extract/mod.rs
// =============================================================================
// Pulls <a href="..."> links out of HTML text.
//
// Submodules:
// - pattern: the regex that recognizes anchor tags with a quoted href
// - extractor: LinkExtractor, the pipeline from HTML text to UrlReference
// =============================================================================

mod extractor;
mod pattern;

pub use extractor::{extract, LinkExtractor};
pub use pattern::href_values;
