// src/link/parts.rs
// =============================================================================
// Splits a URL string into its generic components (RFC 3986, Appendix B).
//
// Components are borrowed exactly as written. url::Url would normalize them
// (an empty path becomes "/", hosts get punycoded).
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

static URI_COMPONENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$").unwrap()
});

/// The components of a URL, borrowed from the original string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts<'a> {
    /// Scheme token, only when it is a valid RFC 3986 scheme
    pub scheme: Option<&'a str>,
    /// Everything between "//" and the path (userinfo, host, port)
    pub authority: Option<&'a str>,
    /// Path, possibly empty
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    pub fn parse(input: &'a str) -> Self {
        // The pattern has no mandatory parts, so it matches every input.
        let Some(caps) = URI_COMPONENTS.captures(input) else {
            return UrlParts {
                scheme: None,
                authority: None,
                path: input,
                query: None,
                fragment: None,
            };
        };

        let scheme = caps.get(1).map(|m| m.as_str());

        // "a+b:x" has a scheme, "1ab:x" or "a b:x" do not. Without a valid
        // scheme the whole "xyz:" prefix belongs to the path.
        if let Some(raw_scheme) = scheme {
            if !is_scheme_token(raw_scheme) {
                return UrlParts {
                    scheme: None,
                    ..Self::parse_schemeless(input)
                };
            }
        }

        UrlParts {
            scheme,
            authority: caps.get(2).map(|m| m.as_str()),
            path: caps.get(3).map_or("", |m| m.as_str()),
            query: caps.get(4).map(|m| m.as_str()),
            fragment: caps.get(5).map(|m| m.as_str()),
        }
    }

    // Splits a string known to carry no scheme.
    fn parse_schemeless(input: &'a str) -> Self {
        let (rest, fragment) = match input.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (input, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };
        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find('/').unwrap_or(after.len());
                (Some(&after[..end]), &after[end..])
            }
            None => (None, rest),
        };

        UrlParts {
            scheme: None,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// Host (and port) with any "user:password@" prefix removed, lower-cased
    pub fn host(&self) -> Option<String> {
        let authority = self.authority?;
        let host = match authority.rsplit_once('@') {
            Some((_userinfo, host)) => host,
            None => authority,
        };

        if host.is_empty() {
            None
        } else {
            Some(host.to_lowercase())
        }
    }
}

/// ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
pub fn is_scheme_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
