//! Percent encoding for query components.

/// Percent-encodes every UTF-8 byte outside the RFC 3986 unreserved set
/// (`A-Z a-z 0-9 - _ . ~`), with uppercase hex digits.
///
/// Space becomes `%20` and `+` becomes `%2B`; nothing else is exempt.
pub fn encode_component(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}
