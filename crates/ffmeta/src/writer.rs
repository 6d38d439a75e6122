//! Writing a [`Document`] back to FFMETADATA text.
//!
//! Output is canonical: the signature line, global tags, every stream, then
//! every chapter. Comments and blank lines are never written.

use regex::Regex;
use std::fmt::Write as _;
use std::sync::LazyLock;

use crate::document::{Chapter, Document};
use crate::error::{ChapterField, Error, Result};
use crate::escape::escape;
use crate::parser::{CHAPTER_MARKER, SIGNATURE, STREAM_MARKER};
use crate::tags::Tags;

/// Version written after the signature.
pub const VERSION: u32 = 1;

static TIMEBASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+/[0-9]+$").expect("Invalid timebase regex"));

static TIMESTAMP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid timestamp regex"));

/// Writes a document as FFMETADATA text.
///
/// # Errors
/// Returns `Error::InvalidChapterField` if a chapter's `TIMEBASE` is not
/// `digits/digits`, or its `START` or `END` is not a non-empty digit string.
///
/// # Example
/// ```
/// use ffmeta::{Chapter, Document, stringify};
///
/// let mut doc = Document::new();
/// doc.tags.insert("title", "Test");
/// doc.chapters.push(Chapter::new("0", "1000"));
///
/// let text = stringify(&doc).unwrap();
/// assert_eq!(text, ";FFMETADATA1\ntitle=Test\n[CHAPTER]\nSTART=0\nEND=1000\n");
/// ```
pub fn stringify(document: &Document) -> Result<String> {
    let mut out = format!("{SIGNATURE}{VERSION}\n");

    write_tags(&mut out, &document.tags);

    for stream in &document.streams {
        out.push_str(STREAM_MARKER);
        out.push('\n');
        write_tags(&mut out, &stream.tags);
    }

    for (index, chapter) in document.chapters.iter().enumerate() {
        write_chapter(&mut out, index, chapter)?;
    }

    tracing::debug!(
        bytes = out.len(),
        streams = document.streams.len(),
        chapters = document.chapters.len(),
        "Wrote FFMETADATA document"
    );
    Ok(out)
}

fn write_chapter(out: &mut String, index: usize, chapter: &Chapter) -> Result<()> {
    out.push_str(CHAPTER_MARKER);
    out.push('\n');

    if let Some(timebase) = &chapter.timebase {
        check_field(index, ChapterField::Timebase, timebase, &TIMEBASE_REGEX)?;
        write_field(out, ChapterField::Timebase, timebase);
    }
    check_field(index, ChapterField::Start, &chapter.start, &TIMESTAMP_REGEX)?;
    check_field(index, ChapterField::End, &chapter.end, &TIMESTAMP_REGEX)?;
    write_field(out, ChapterField::Start, &chapter.start);
    write_field(out, ChapterField::End, &chapter.end);

    write_tags(out, &chapter.tags);
    Ok(())
}

fn check_field(index: usize, field: ChapterField, value: &str, pattern: &Regex) -> Result<()> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(Error::invalid_field(index, field, value))
    }
}

fn write_field(out: &mut String, field: ChapterField, value: &str) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{field}={value}");
}

fn write_tags(out: &mut String, tags: &Tags) {
    for (key, value) in tags.iter() {
        let _ = writeln!(out, "{}={}", escape(key), escape(value));
    }
}
