//! Parser and writer for the FFMETADATA text format.
//!
//! FFMETADATA is the plain-text format used to carry global, per-stream and
//! per-chapter metadata for a media file:
//!
//! ```text
//! ;FFMETADATA1
//! title=Example
//! [STREAM]
//! language=eng
//! [CHAPTER]
//! TIMEBASE=1/1000
//! START=0
//! END=1000
//! title=Intro
//! ```
//!
//! [`parse`] turns such text into a [`Document`] and [`stringify`] writes a
//! [`Document`] back out. Writing a parsed document and parsing it again
//! yields an equal document.
//!
//! # Modules
//!
//! - [`scan`] — escape-aware delimiter search shared by the reader
//! - [`lines`] — logical line splitting
//! - [`escape`] — key/value escaping
//! - [`parser`] / [`writer`] — the two directions of the codec

pub mod document;
pub mod error;
pub mod escape;
pub mod lines;
pub mod parser;
pub mod scan;
pub mod tags;
pub mod writer;

pub use document::{Chapter, Document, Stream};
pub use error::{ChapterField, Error, ErrorKind, Result};
pub use parser::{ParseOptions, parse, parse_with};
pub use tags::Tags;
pub use writer::stringify;
