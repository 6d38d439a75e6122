//! Error types for ffmeta

use std::fmt;

/// Result type for ffmeta operations
pub type Result<T> = std::result::Result<T, Error>;

/// The chapter header fields that carry timing information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChapterField {
    Timebase,
    Start,
    End,
}

impl ChapterField {
    /// The key used for this field on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timebase => "TIMEBASE",
            Self::Start => "START",
            Self::End => "END",
        }
    }
}

impl fmt::Display for ChapterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The text did not follow the FFMETADATA grammar.
    Syntax,
    /// A document could not be written because a chapter field is malformed.
    Format,
}

/// Errors that can occur while parsing or writing FFMETADATA
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Input does not start with the ;FFMETADATA signature")]
    MissingSignature,

    #[error("Expected chapter {expected} at line {line}, found {found:?}")]
    UnexpectedLine {
        expected: ChapterField,
        line: usize,
        found: String,
    },

    #[error("Expected chapter {expected}, found end of input")]
    UnexpectedEof { expected: ChapterField },

    #[error("Missing '=' separator in tag at line {line}: {found:?}")]
    MissingSeparator { line: usize, found: String },

    #[error("Chapter {chapter} has invalid {field} value {value:?}")]
    InvalidChapterField {
        chapter: usize,
        field: ChapterField,
        value: String,
    },
}

impl Error {
    /// Classifies the error as a parse-time syntax error or a write-time
    /// format error.
    ///
    /// # Example
    /// ```
    /// use ffmeta::{ErrorKind, parse};
    ///
    /// let err = parse("[CHAPTER]\n").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidChapterField { .. } => ErrorKind::Format,
            Self::MissingSignature
            | Self::UnexpectedLine { .. }
            | Self::UnexpectedEof { .. }
            | Self::MissingSeparator { .. } => ErrorKind::Syntax,
        }
    }

    /// Returns `true` if the input text did not follow the grammar.
    pub fn is_syntax(&self) -> bool {
        self.kind() == ErrorKind::Syntax
    }

    /// Returns `true` if a document could not be written.
    pub fn is_format(&self) -> bool {
        self.kind() == ErrorKind::Format
    }

    pub(crate) fn invalid_field(
        chapter: usize,
        field: ChapterField,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidChapterField {
            chapter,
            field,
            value: value.into(),
        }
    }
}
