// src/error.rs
// =============================================================================
// Error types for the library.
//
// Only two things can go wrong:
// - Configuration: an operation needs a base URL and none was configured
// - Acquisition: we could not get the HTML text from a file or a URL
//
// Extraction itself never fails. A malformed tag is simply not matched.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The operation needs a base URL but the extractor has none
    #[error("field \"base_url\" must not be empty to use {operation}")]
    MissingBaseUrl { operation: &'static str },

    #[error("HTML file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("path is not an .html/.htm file: {}", .0.display())]
    NotHtmlFile(PathBuf),

    #[error("permission denied while reading {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("failed to read {}", .0.display())]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to fetch {0}")]
    Request(String, #[source] reqwest::Error),

    #[error("failed to fetch {0}: HTTP {1}")]
    HttpStatus(String, u16),
}

impl Error {
    /// True for errors caused by how the extractor was set up
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::MissingBaseUrl { .. })
    }

    /// True for errors raised while reading a file or fetching a page
    pub fn is_acquisition(&self) -> bool {
        !self.is_configuration()
    }
}
