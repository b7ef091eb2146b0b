use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// The set of characters percent-encoded in a query component.
///
/// Everything except the ASCII alphanumerics and the unreserved marks
/// U+002D (-), U+002E (.), U+005F (_) and U+007E (~) is encoded.
///
/// SPACE is left out of the set so that it can be written as `+` instead.
const QUERY_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encodes a key or value for use in a querystring.
///
/// Spaces are written as `+`, all other reserved bytes as uppercase `%XX`
/// escapes. Non-ASCII input is encoded byte by byte from its UTF-8 form.
///
/// The function returns an iterator to avoid allocations when no encoding is needed.
pub fn encode(s: &str) -> impl Iterator<Item = Cow<'_, str>> + '_ {
    percent_encoding::utf8_percent_encode(s, QUERY_COMPONENT_SET).map(|chunk| {
        if chunk.contains(' ') {
            Cow::Owned(chunk.replace(' ', "+"))
        } else {
            Cow::Borrowed(chunk)
        }
    })
}
