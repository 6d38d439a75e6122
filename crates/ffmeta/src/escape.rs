//! Escaping of metadata keys and values.
//!
//! Inside a key or value the characters `=`, `;`, `#`, `\` and line
//! terminators are written with a preceding backslash.

use std::borrow::Cow;

use crate::scan::ESCAPE;

/// Returns true for characters that must be escaped in keys and values.
///
/// `\r` and NUL are included alongside `\n` because all three end a line.
fn needs_escape(c: char) -> bool {
    matches!(c, '=' | ';' | '#' | ESCAPE | '\n' | '\r' | '\0')
}

/// Escapes a key or value for writing.
///
/// # Example
/// ```
/// use ffmeta::escape::escape;
///
/// assert_eq!(escape("a=b;c"), r"a\=b\;c");
/// assert_eq!(escape("plain"), "plain");
/// ```
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(needs_escape) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        if needs_escape(c) {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Resolves escapes in a key or value read from a tag line.
///
/// Every `\x` becomes `x`, including escaped line terminators. A lone
/// backslash at the very end of the input is kept as a literal backslash.
///
/// # Example
/// ```
/// use ffmeta::escape::unescape;
///
/// assert_eq!(unescape(r"a\=b\\c"), r"a=b\c");
/// assert_eq!(unescape("dangling\\"), "dangling\\");
/// ```
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            out.push(chars.next().unwrap_or(ESCAPE));
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
