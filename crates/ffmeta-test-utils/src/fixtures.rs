//! Sample FFMETADATA files.
//!
//! The files live in `test-fixtures/samples` at the workspace root and are
//! embedded at compile time so tests do not touch the filesystem.

/// Keys named `__proto__` in the global, stream and chapter sections.
pub const PROTO: &str = include_str!("../../../test-fixtures/samples/proto.ffmeta");

/// Values ending in an unescaped backslash, which folds the next physical
/// line into the value.
pub const BUG_9144: &str = include_str!("../../../test-fixtures/samples/bug-9144.ffmeta");

/// Every escapable character in keys and values, plus an escaped
/// `TIMEBASE` separator.
pub const ESCAPING: &str = include_str!("../../../test-fixtures/samples/escaping.ffmeta");

/// A document using `\r\n` line endings, a comment and a blank line.
pub const CRLF: &str = include_str!("../../../test-fixtures/samples/crlf.ffmeta");

pub const INVALID_END: &str = include_str!("../../../test-fixtures/samples/invalid-end.ffmeta");
pub const INVALID_END_EOF: &str =
    include_str!("../../../test-fixtures/samples/invalid-end-eof.ffmeta");
pub const INVALID_START: &str =
    include_str!("../../../test-fixtures/samples/invalid-start.ffmeta");
pub const INVALID_START_EOF: &str =
    include_str!("../../../test-fixtures/samples/invalid-start-eof.ffmeta");
pub const INVALID_TIMEBASE: &str =
    include_str!("../../../test-fixtures/samples/invalid-timebase.ffmeta");
pub const INVALID_TIMEBASE_EOF: &str =
    include_str!("../../../test-fixtures/samples/invalid-timebase-eof.ffmeta");

/// All samples that must fail to parse, with their names.
pub const INVALID: &[(&str, &str)] = &[
    ("invalid-end", INVALID_END),
    ("invalid-end-eof", INVALID_END_EOF),
    ("invalid-start", INVALID_START),
    ("invalid-start-eof", INVALID_START_EOF),
    ("invalid-timebase", INVALID_TIMEBASE),
    ("invalid-timebase-eof", INVALID_TIMEBASE_EOF),
];
