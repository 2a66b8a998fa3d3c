// src/source/mod.rs
// =============================================================================
// Where HTML text comes from.
//
// Each source only produces a String or fails with an error naming the file
// or URL involved. None of them knows anything about links.
//
// Submodules:
// - file: reads a local .html/.htm file
// - http: downloads a page
// =============================================================================

mod file;
mod http;

pub use file::{is_html_path, read_html_file};
pub use http::{fetch_html, DEFAULT_TIMEOUT};
