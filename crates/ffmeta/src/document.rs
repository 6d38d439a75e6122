//! The in-memory form of an FFMETADATA file.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::tags::Tags;

/// A parsed FFMETADATA file: global tags, then streams, then chapters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "metadata", default)]
    pub tags: Tags,
    #[serde(default)]
    pub streams: Vec<Stream>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FromStr for Document {
    type Err = Error;

    /// Parses in lenient mode, see [`crate::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

/// Metadata for one media stream, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    #[serde(rename = "metadata", default)]
    pub tags: Tags,
}

impl Stream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(tags: Tags) -> Self {
        Self { tags }
    }
}

/// A chapter marker.
///
/// `start` and `end` are kept as the decimal strings found in the text; they
/// are only interpreted against `timebase` by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(rename = "TIMEBASE", default, skip_serializing_if = "Option::is_none")]
    pub timebase: Option<String>,
    #[serde(rename = "START")]
    pub start: String,
    #[serde(rename = "END")]
    pub end: String,
    #[serde(rename = "metadata", default)]
    pub tags: Tags,
}

impl Chapter {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            timebase: None,
            start: start.into(),
            end: end.into(),
            tags: Tags::new(),
        }
    }

    pub fn with_timebase(mut self, timebase: impl Into<String>) -> Self {
        self.timebase = Some(timebase.into());
        self
    }

    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }
}
