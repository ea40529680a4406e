//! Nextline is a library to read byte sources one line at a time.
//!
//! This crate offers a [LineReader] that returns the next line of a source on
//! every call, without re-reading from the start and without loading the
//! whole source into memory. Core functionality provided:
//! - Per-source state: partial lines read in one call are carried over to the
//!   next, in one pending buffer per source identifier.
//! - Many sources: identifiers `0..max_sources` are independent, calls for
//!   different sources may be interleaved freely.
//! - Configurability:
//!   - Chunk size: maximum bytes requested per raw read
//!   - Separator: the byte ending a line (default `\n`)
//!   - Capacity: number of accepted source identifiers
//! - Sources: anything implementing [std::io::Read] via
//!   [ReaderSource](crate::reader::ReaderSource), owned bytes via
//!   [InMemorySource](crate::reader::InMemorySource), or your own
//!   [RawSource](crate::reader::RawSource) implementation.
//!
//! Limitations:
//! - No seeking or rewinding
//! - No encoding awareness, lines are bytes
//! - No limit on line length
//!
//! # Usage patterns
//! 1. [read_lines] and [read_file_lines] collect all lines of one source
//!    with default settings.
//! 2. Configure a reader using [LineReaderBuilder](crate::reader::LineReaderBuilder)
//!    and call [LineReader::read_next_line] per line.
//!
//! ## Example Default Configuration
//! ```no_run
//! use nextline::read_file_lines;
//!
//! let lines = read_file_lines("server.log")?;
//! println!("Read {} lines", lines.len());
//! # Ok::<(), nextline::reader::LineError>(())
//! ```
//!
//! ## Example Reader Configuration
//! ```
//! use nextline::reader::{InMemorySource, LineReaderBuilder};
//!
//! let mut reader = LineReaderBuilder::new()
//!     .with_chunk_size(3)
//!     .build()?;
//!
//! let mut source = InMemorySource::for_str("ab\ncde\nf");
//! assert_eq!(reader.read_next_line(0, &mut source)?, Some(b"ab\n".to_vec()));
//! assert_eq!(reader.read_next_line(0, &mut source)?, Some(b"cde\n".to_vec()));
//! assert_eq!(reader.read_next_line(0, &mut source)?, Some(b"f".to_vec()));
//! assert_eq!(reader.read_next_line(0, &mut source)?, None);
//! # Ok::<(), nextline::reader::LineError>(())
//! ```

pub mod reader;

pub use crate::reader::{LineError, LineReader};

use crate::reader::{RawSource, ReaderSource};
use std::path::Path;

// ============================================================================
// Quick API
// ============================================================================
/// Reads all lines of `source` using default settings.
///
/// Lines keep their trailing `\n`; the last one lacks it if the source did.
pub fn read_lines<S: RawSource>(mut source: S) -> Result<Vec<Vec<u8>>, LineError> {
    let mut reader = LineReader::new();
    reader.lines(0, &mut source).collect()
}

/// Opens the file at `path` and reads all of its lines using default settings.
///
/// # Errors
/// [LineError::Io] if the file cannot be opened, [LineError::ReadError] if
/// reading it fails.
pub fn read_file_lines<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>, LineError> {
    read_lines(ReaderSource::from_file(path)?)
}
