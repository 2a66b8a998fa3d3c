// src/link/info.rs
// Serializable summary of one resolved link.

use serde::{Deserialize, Serialize};

/// What `UrlReference::info` and `validate` hand back to callers.
///
/// Every field is always serialized; missing values become `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInfo {
    /// The href value as captured
    pub raw: String,
    /// The page URL the link was found on
    pub base: Option<String>,
    /// The link as a complete URL, if it could be resolved
    pub absolute: Option<String>,
    pub is_absolute: bool,
    pub scheme: Option<String>,
    pub domain: Option<String>,
    pub path: Option<String>,
}
