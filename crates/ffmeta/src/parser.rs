//! Parsing of FFMETADATA text into a [`Document`].
//!
//! The input is first cut into logical lines, then walked once by a small
//! state machine:
//! ```text
//! ;FFMETADATA1
//! title=Global tag
//! [STREAM]
//! language=eng
//! [CHAPTER]
//! TIMEBASE=1/1000
//! START=0
//! END=1000
//! title=Intro
//! ```

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::document::{Chapter, Document, Stream};
use crate::error::{ChapterField, Error, Result};
use crate::escape::unescape;
use crate::lines::{Line, split_lines};
use crate::scan::find_unescaped;
use crate::tags::Tags;

/// Signature every FFMETADATA file starts with.
pub const SIGNATURE: &str = ";FFMETADATA";
/// Marker line opening a stream section.
pub const STREAM_MARKER: &str = "[STREAM]";
/// Marker line opening a chapter section.
pub const CHAPTER_MARKER: &str = "[CHAPTER]";

/// The separator may be written escaped (`1\/1000`) by some writers.
static TIMEBASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^TIMEBASE=([0-9]+)\\?/([0-9]+)$").expect("Invalid timebase regex")
});

static START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^START=([0-9]+)$").expect("Invalid start regex"));

static END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^END=([0-9]+)$").expect("Invalid end regex"));

/// Options controlling how strictly input is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Reject input that does not begin with `;FFMETADATA`.
    pub require_signature: bool,
}

impl ParseOptions {
    /// Options that require the `;FFMETADATA` signature.
    pub fn strict() -> Self {
        Self {
            require_signature: true,
        }
    }
}

/// Parses FFMETADATA text, accepting input without a signature.
///
/// # Example
/// ```
/// use ffmeta::parse;
///
/// let doc = parse(";FFMETADATA1\ntitle=Test\n[CHAPTER]\nSTART=0\nEND=1000\n").unwrap();
/// assert_eq!(doc.tags.get("title"), Some("Test"));
/// assert_eq!(doc.chapters[0].end, "1000");
/// ```
pub fn parse(text: &str) -> Result<Document> {
    parse_with(text, &ParseOptions::default())
}

/// Parses FFMETADATA text with the given options.
///
/// # Errors
/// Returns a syntax error if the signature is required but missing, if a
/// chapter header is malformed or truncated, or if a tag line has no
/// unescaped `=`.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Document> {
    if !text.starts_with(SIGNATURE) {
        if options.require_signature {
            return Err(Error::MissingSignature);
        }
        tracing::debug!("Input has no {} signature, parsing leniently", SIGNATURE);
    }

    let document = Parser::new(split_lines(text)).run()?;
    tracing::debug!(
        tags = document.tags.len(),
        streams = document.streams.len(),
        chapters = document.chapters.len(),
        "Parsed FFMETADATA document"
    );
    Ok(document)
}

/// Where the parser currently is in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before the first section marker; tags are global.
    Global,
    /// Inside the stream at this index.
    Stream(usize),
    /// Just after a `[CHAPTER]` marker, expecting the timing lines.
    ChapterHeader,
    /// Inside the chapter at this index.
    Chapter(usize),
}

struct Parser<'a> {
    lines: Vec<Line<'a>>,
    cursor: usize,
    state: State,
    document: Document,
}

impl<'a> Parser<'a> {
    fn new(lines: Vec<Line<'a>>) -> Self {
        Self {
            lines,
            cursor: 0,
            state: State::Global,
            document: Document::new(),
        }
    }

    fn run(mut self) -> Result<Document> {
        loop {
            self.state = match self.state {
                State::ChapterHeader => {
                    let chapter = self.chapter_header()?;
                    self.document.chapters.push(chapter);
                    State::Chapter(self.document.chapters.len() - 1)
                }
                State::Global | State::Stream(_) | State::Chapter(_) => {
                    let Some(line) = self.next_line() else {
                        break;
                    };
                    self.section_line(line)?
                }
            };
        }
        Ok(self.document)
    }

    fn next_line(&mut self) -> Option<Line<'a>> {
        let line = self.lines.get(self.cursor).copied();
        if line.is_some() {
            self.cursor += 1;
        }
        line
    }

    fn peek_line(&self) -> Option<Line<'a>> {
        self.lines.get(self.cursor).copied()
    }

    /// Handles a line outside a chapter header and returns the next state.
    fn section_line(&mut self, line: Line<'a>) -> Result<State> {
        match line.text {
            STREAM_MARKER => {
                tracing::trace!(line = line.number, "Stream section");
                self.document.streams.push(Stream::new());
                Ok(State::Stream(self.document.streams.len() - 1))
            }
            CHAPTER_MARKER => {
                tracing::trace!(line = line.number, "Chapter section");
                Ok(State::ChapterHeader)
            }
            _ => {
                let (key, value) = split_tag(line)?;
                self.current_tags()
                    .insert(unescape(key).into_owned(), unescape(value).into_owned());
                Ok(self.state)
            }
        }
    }

    /// Consumes the optional `TIMEBASE` line and the required `START` and
    /// `END` lines that follow a chapter marker.
    fn chapter_header(&mut self) -> Result<Chapter> {
        let timebase = self
            .peek_line()
            .and_then(|line| TIMEBASE_REGEX.captures(line.text))
            .map(|caps| format!("{}/{}", &caps[1], &caps[2]));
        if timebase.is_some() {
            self.cursor += 1;
        }

        let start = self.header_field(ChapterField::Start, &START_REGEX)?;
        let end = self.header_field(ChapterField::End, &END_REGEX)?;

        Ok(Chapter {
            timebase,
            start,
            end,
            tags: Tags::new(),
        })
    }

    fn header_field(&mut self, field: ChapterField, pattern: &Regex) -> Result<String> {
        let line = self
            .next_line()
            .ok_or(Error::UnexpectedEof { expected: field })?;
        pattern
            .captures(line.text)
            .map(|caps| caps[1].to_string())
            .ok_or_else(|| Error::UnexpectedLine {
                expected: field,
                line: line.number,
                found: line.text.to_string(),
            })
    }

    fn current_tags(&mut self) -> &mut Tags {
        match self.state {
            State::Stream(i) => &mut self.document.streams[i].tags,
            State::Chapter(i) => &mut self.document.chapters[i].tags,
            State::Global | State::ChapterHeader => &mut self.document.tags,
        }
    }
}

/// Splits a tag line at its first unescaped `=` into raw key and value.
fn split_tag(line: Line<'_>) -> Result<(&str, &str)> {
    let eq = find_unescaped(line.text, 0, |c| c == '=').ok_or_else(|| Error::MissingSeparator {
        line: line.number,
        found: line.text.to_string(),
    })?;
    Ok((&line.text[..eq], &line.text[eq + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> Line<'_> {
        Line { number: 1, text }
    }

    #[test]
    fn test_split_tag() {
        assert_eq!(split_tag(line("k=v")).unwrap(), ("k", "v"));
        assert_eq!(split_tag(line(r"k\=x=v=w")).unwrap(), (r"k\=x", "v=w"));
        assert_eq!(split_tag(line("=")).unwrap(), ("", ""));
    }

    #[test]
    fn test_split_tag_without_separator() {
        let err = split_tag(line(r"k\=v")).unwrap_err();
        assert!(matches!(err, Error::MissingSeparator { line: 1, .. }));
    }

    #[test]
    fn test_chapter_header_with_timebase() {
        let lines = split_lines("TIMEBASE=1\\/1000\nSTART=5\nEND=10\ntitle=x");
        let mut parser = Parser::new(lines);
        let chapter = parser.chapter_header().unwrap();
        assert_eq!(chapter.timebase.as_deref(), Some("1/1000"));
        assert_eq!(chapter.start, "5");
        assert_eq!(chapter.end, "10");
        assert_eq!(parser.cursor, 3);
    }

    #[test]
    fn test_chapter_header_without_timebase() {
        let mut parser = Parser::new(split_lines("START=0\nEND=1"));
        let chapter = parser.chapter_header().unwrap();
        assert_eq!(chapter.timebase, None);
        assert_eq!(parser.cursor, 2);
    }

    #[test]
    fn test_chapter_header_eof() {
        let mut parser = Parser::new(split_lines("START=0\n"));
        let err = parser.chapter_header().unwrap_err();
        assert_eq!(
            err,
            Error::UnexpectedEof {
                expected: ChapterField::End
            }
        );
    }

    #[test]
    fn test_marker_must_match_whole_line() {
        let doc = parse("[STREAM]x=1\n").unwrap();
        assert!(doc.streams.is_empty());
        assert_eq!(doc.tags.get("[STREAM]x"), Some("1"));
    }

    #[test]
    fn test_strict_mode_requires_signature() {
        let err = parse_with("title=x\n", &ParseOptions::strict()).unwrap_err();
        assert_eq!(err, Error::MissingSignature);
        assert!(parse_with(";FFMETADATA1\ntitle=x\n", &ParseOptions::strict()).is_ok());
        assert!(parse("title=x\n").is_ok());
    }
}
