//! Escape-aware scanning shared by the line splitter and the tag parser.

/// The escape character of the FFMETADATA format.
pub const ESCAPE: char = '\\';

/// Finds the first character at or after byte offset `from` that matches
/// `is_delimiter` and is not escaped.
///
/// A backslash escapes exactly one following character, which is then never
/// considered a delimiter. The returned offset is relative to the start of
/// `haystack`.
///
/// # Panics
/// Panics if `from` is not on a char boundary of `haystack`.
///
/// # Example
/// ```
/// use ffmeta::scan::find_unescaped;
///
/// assert_eq!(find_unescaped(r"a\=b=c", 0, |c| c == '='), Some(4));
/// assert_eq!(find_unescaped(r"a\=b", 0, |c| c == '='), None);
/// ```
pub fn find_unescaped(
    haystack: &str,
    from: usize,
    is_delimiter: impl Fn(char) -> bool,
) -> Option<usize> {
    let mut chars = haystack[from..].char_indices();
    while let Some((i, c)) = chars.next() {
        if c == ESCAPE {
            chars.next();
        } else if is_delimiter(c) {
            return Some(from + i);
        }
    }
    None
}
