// src/link/mod.rs
// =============================================================================
// Everything about a single link once it has been pulled out of the HTML.
//
// Submodules:
// - reference: UrlReference, the link plus its lazily derived parts
// - parts: splits a URL string into scheme/authority/path/query/fragment
// - resolve: joins a relative reference onto a base (RFC 3986 5.2)
// - info: LinkInfo, the serializable summary of a link
// =============================================================================

mod info;
mod parts;
mod reference;
mod resolve;

pub use info::LinkInfo;
pub use parts::{is_scheme_token, UrlParts};
pub use reference::UrlReference;
pub use resolve::{remove_dot_segments, resolve_reference};
