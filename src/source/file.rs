// src/source/file.rs
// Reads HTML from a local file after checking that it looks like one.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// True for paths ending in .html or .htm (any letter case)
pub fn is_html_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

/// Reads a UTF-8 .html/.htm file into a string.
///
/// Errors:
/// - `FileNotFound` if nothing exists at `path`
/// - `NotHtmlFile` if it is a directory or has another extension
/// - `PermissionDenied` if we may not read it
/// - `Read` for anything else, including invalid UTF-8
pub fn read_html_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    if !path.is_file() || !is_html_path(path) {
        return Err(Error::NotHtmlFile(path.to_path_buf()));
    }

    let html = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => Error::PermissionDenied(path.to_path_buf()),
        _ => Error::Read(path.to_path_buf(), e),
    })?;

    debug!(path = %path.display(), bytes = html.len(), "read HTML file");
    Ok(html)
}
