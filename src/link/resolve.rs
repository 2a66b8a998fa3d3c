// src/link/resolve.rs
// =============================================================================
// Relative reference resolution, RFC 3986 section 5.2.
//
// Works on the raw strings split by UrlParts: nothing is percent-encoded,
// punycoded or otherwise rewritten, so "//сайт.рф/x" keeps its Unicode host
// and a backslash stays an ordinary path character.
// =============================================================================

use super::parts::UrlParts;

/// Joins `reference` onto `base` (section 5.2.2).
///
/// Returns None when `base` has no scheme, since the result could not be
/// an absolute URL.
pub fn resolve_reference(base: &str, reference: &str) -> Option<String> {
    let base = UrlParts::parse(base);
    let scheme = base.scheme?;
    let target = UrlParts::parse(reference);

    // An absolute reference replaces everything.
    if let Some(target_scheme) = target.scheme {
        return Some(recompose(
            target_scheme,
            target.authority,
            &remove_dot_segments(target.path),
            target.query,
            target.fragment,
        ));
    }

    let (authority, path, query) = if target.authority.is_some() {
        (target.authority, remove_dot_segments(target.path), target.query)
    } else if target.path.is_empty() {
        (base.authority, base.path.to_string(), target.query.or(base.query))
    } else if target.path.starts_with('/') {
        (base.authority, remove_dot_segments(target.path), target.query)
    } else {
        let merged = merge_paths(&base, target.path);
        (base.authority, remove_dot_segments(&merged), target.query)
    };

    Some(recompose(scheme, authority, &path, query, target.fragment))
}

// Section 5.2.3
fn merge_paths(base: &UrlParts<'_>, reference_path: &str) -> String {
    if base.authority.is_some() && base.path.is_empty() {
        return format!("/{}", reference_path);
    }

    match base.path.rfind('/') {
        Some(i) => format!("{}{}", &base.path[..=i], reference_path),
        None => reference_path.to_string(),
    }
}

/// Section 5.2.4: collapses "." and ".." segments.
pub fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_segment(&mut output);
        } else if input == "/.." {
            input = "/";
            pop_segment(&mut output);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            // Move the first segment (with its leading "/") to the output.
            let start = usize::from(input.starts_with('/'));
            let end = input[start..].find('/').map_or(input.len(), |i| i + start);
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }

    output
}

fn pop_segment(output: &mut String) {
    match output.rfind('/') {
        Some(i) => output.truncate(i),
        None => output.clear(),
    }
}

// Section 5.3
fn recompose(
    scheme: &str,
    authority: Option<&str>,
    path: &str,
    query: Option<&str>,
    fragment: Option<&str>,
) -> String {
    let mut url = String::with_capacity(scheme.len() + path.len() + 16);
    url.push_str(scheme);
    url.push(':');
    if let Some(authority) = authority {
        url.push_str("//");
        url.push_str(authority);
    }
    url.push_str(path);
    if let Some(query) = query {
        url.push('?');
        url.push_str(query);
    }
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}
