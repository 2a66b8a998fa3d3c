// src/link/reference.rs
// =============================================================================
// A single link found in a page, plus everything we can derive from it.
//
// A UrlReference holds two immutable strings:
// - raw: the href value, exactly as captured (minus surrounding whitespace)
// - base: the URL of the page it came from, if known
//
// The absolute form, scheme, domain and path are computed the first time
// they are asked for and then cached. Since raw and base never change,
// the cache can never go stale.
// =============================================================================

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use tracing::{debug, warn};
use url::Url;

use super::info::LinkInfo;
use super::parts::UrlParts;
use super::resolve::resolve_reference;

#[derive(Debug, Clone)]
pub struct UrlReference {
    raw: String,
    base: Option<String>,
    // Filled at most once. OnceLock keeps UrlReference Sync.
    absolute: OnceLock<Option<String>>,
    components: OnceLock<Components>,
}

// The pieces of the absolute URL we report
#[derive(Debug, Clone, Default)]
struct Components {
    scheme: Option<String>,
    domain: Option<String>,
    path: Option<String>,
}

impl UrlReference {
    /// Creates a reference from an href value and the page it was found on.
    ///
    /// Both strings are trimmed. An empty raw value is allowed; a base that
    /// is empty after trimming counts as no base at all.
    pub fn new(raw: impl AsRef<str>, base: Option<&str>) -> Self {
        let base = base
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string);

        UrlReference {
            raw: raw.as_ref().trim().to_string(),
            base,
            absolute: OnceLock::new(),
            components: OnceLock::new(),
        }
    }

    /// The href value as captured
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The page URL used to resolve relative references
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// True when the raw value carries its own scheme ("https:", "mailto:").
    ///
    /// Protocol-relative references ("//host/path") have no scheme and are
    /// therefore not absolute.
    pub fn is_absolute(&self) -> bool {
        UrlParts::parse(&self.raw).scheme.is_some()
    }

    /// The reference as a complete URL.
    ///
    /// Absolute references are returned unchanged. Relative ones are joined
    /// onto the base following RFC 3986 section 5. Without a usable base
    /// there is no absolute form.
    pub fn absolute(&self) -> Option<&str> {
        self.absolute.get_or_init(|| self.resolve()).as_deref()
    }

    /// Scheme of the absolute URL, lower-cased
    pub fn scheme(&self) -> Option<&str> {
        self.components().scheme.as_deref()
    }

    /// Lower-cased host of the absolute URL; None for "mailto:" and friends.
    ///
    /// This is the authority without its "user:password@" part. A port, if
    /// present, is kept ("example.com:8080").
    pub fn domain(&self) -> Option<&str> {
        self.components().domain.as_deref()
    }

    /// Path of the absolute URL. An empty path is None, "/" is kept.
    pub fn path(&self) -> Option<&str> {
        self.components().path.as_deref()
    }

    /// Summary of everything we know about this link
    pub fn info(&self) -> LinkInfo {
        LinkInfo {
            raw: self.raw.clone(),
            base: self.base.clone(),
            absolute: self.absolute().map(str::to_string),
            is_absolute: self.is_absolute(),
            scheme: self.scheme().map(str::to_string),
            domain: self.domain().map(str::to_string),
            path: self.path().map(str::to_string),
        }
    }

    fn resolve(&self) -> Option<String> {
        if self.is_absolute() {
            return Some(self.raw.clone());
        }

        let base = self.base.as_deref()?;

        // The join itself works on the raw strings; Url only vets the base.
        if let Err(e) = Url::parse(base) {
            warn!(base, error = %e, "invalid base URL, cannot resolve relative link");
            return None;
        }

        let resolved = resolve_reference(base, &self.raw);
        if resolved.is_none() {
            debug!(raw = %self.raw, base, "base URL has no scheme, link left unresolved");
        }
        resolved
    }

    fn components(&self) -> &Components {
        self.components.get_or_init(|| {
            let Some(absolute) = self.absolute() else {
                return Components::default();
            };

            let parts = UrlParts::parse(absolute);
            Components {
                scheme: parts.scheme.map(str::to_ascii_lowercase),
                domain: parts.host(),
                path: Some(parts.path)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string),
            }
        })
    }
}

// Identity is (raw, base); the caches are derived from them.
impl PartialEq for UrlReference {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.base == other.base
    }
}

impl Eq for UrlReference {}

impl Hash for UrlReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
        self.base.hash(state);
    }
}

impl fmt::Display for UrlReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.absolute().unwrap_or(&self.raw))
    }
}
