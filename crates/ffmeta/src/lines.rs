//! Splitting raw FFMETADATA text into logical lines.
//!
//! A logical line ends at `\n`, `\r` or NUL unless that terminator is
//! escaped with a backslash, in which case it stays part of the line.
//! Escapes are kept verbatim; they are resolved later by
//! [`unescape`](crate::escape::unescape) when a key or value is extracted.

use crate::scan::find_unescaped;

/// A logical line and the 1-based physical line it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Returns true for characters that end a physical line.
pub fn is_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\0')
}

/// Splits `text` into logical lines, dropping blank lines and comments
/// (lines starting with `;` or `#`).
///
/// # Example
/// ```
/// use ffmeta::lines::split_lines;
///
/// let lines = split_lines(";FFMETADATA1\ntitle=a\\\nb\n\n# note\nartist=c");
/// let texts: Vec<_> = lines.iter().map(|l| l.text).collect();
/// assert_eq!(texts, ["title=a\\\nb", "artist=c"]);
/// ```
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;
    let mut number = 1;

    while let Some(end) = find_unescaped(text, offset, is_terminator) {
        push_line(&mut lines, number, &text[offset..end]);
        // Terminators are single-byte, so `end + 1` is a char boundary.
        number += count_breaks(text, offset, end + 1);
        offset = end + 1;
    }
    push_line(&mut lines, number, &text[offset..]);

    lines
}

fn push_line<'a>(lines: &mut Vec<Line<'a>>, number: usize, text: &'a str) {
    if text.is_empty() || text.starts_with([';', '#']) {
        return;
    }
    lines.push(Line { number, text });
}

/// Counts physical line breaks in `text[start..end]`, treating `\r\n` as one.
fn count_breaks(text: &str, start: usize, end: usize) -> usize {
    let bytes = text.as_bytes();
    (start..end)
        .filter(|&i| match bytes[i] {
            b'\n' | b'\0' => true,
            b'\r' => bytes.get(i + 1) != Some(&b'\n'),
            _ => false,
        })
        .count()
}
