// src/lib.rs
// =============================================================================
// link_extractor: find <a href="..."> links in HTML and tell you what they
// point at.
//
// The HTML is scanned with a single regular expression rather than parsed
// into a DOM. Every href found becomes a UrlReference that knows its raw
// value, the page it came from, and (lazily) its absolute URL, scheme,
// domain and path.
//
// Modules:
// - link: UrlReference and LinkInfo
// - extract: the anchor-tag pattern and LinkExtractor
// - source: reading HTML from files and URLs
// - error: the library's Error type
// =============================================================================

pub mod error;
pub mod extract;
pub mod link;
pub mod source;

pub use error::{Error, Result};
pub use extract::{extract, LinkExtractor};
pub use link::{LinkInfo, UrlReference};
