//! Parser for region list files.
//!
//! A regions file is plain text with one region per line, fields
//! comma-separated: `<chromosome>,<start>,<end>`. Parsing is fail-fast: the
//! first malformed line aborts the run with an error naming the line.

pub mod regions;

pub use regions::{parse_region_line, ParseError, RegionSource};
