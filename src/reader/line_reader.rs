//! Reading one line per call from many sources.
//!
//! This module provides the [LineReaderBuilder] and [LineReader] structs,
//! and the [Lines] iterator over the lines of one source.

use log::debug;

use crate::reader::extractor::split_pending;
use crate::reader::filler::{FillOutcome, fill};
use crate::reader::line_error::LineError;
use crate::reader::raw_source::RawSource;
use crate::reader::registry::{DEFAULT_MAX_SOURCES, SourceId, SourceRegistry};

/// Default number of bytes requested per raw read.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Default line separator.
pub const DEFAULT_SEPARATOR: u8 = b'\n';

// =#========================================================================#=
// LINE READER BUILDER
// =#========================================================================$=
/// Builder for configuring and creating a [LineReader].
///
/// # Configuration Options
/// - [`with_chunk_size()`](LineReaderBuilder::with_chunk_size):
///   bytes requested per raw read (default [DEFAULT_CHUNK_SIZE])
/// - [`with_separator()`](LineReaderBuilder::with_separator):
///   line separator byte (default `b'\n'`)
/// - [`with_max_sources()`](LineReaderBuilder::with_max_sources):
///   accepted identifiers `0..max_sources`
///   (default [DEFAULT_MAX_SOURCES](crate::reader::registry::DEFAULT_MAX_SOURCES))
///
/// # Example
/// ```
/// use nextline::reader::{InMemorySource, LineReaderBuilder};
///
/// let mut reader = LineReaderBuilder::new()
///     .with_chunk_size(3)
///     .with_separator(b';')
///     .build()?;
///
/// let mut source = InMemorySource::for_str("a;bc;");
/// assert_eq!(reader.read_next_line(0, &mut source)?, Some(b"a;".to_vec()));
/// assert_eq!(reader.read_next_line(0, &mut source)?, Some(b"bc;".to_vec()));
/// assert_eq!(reader.read_next_line(0, &mut source)?, None);
/// # Ok::<(), nextline::reader::LineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LineReaderBuilder {
    chunk_size: usize,
    separator: u8,
    max_sources: usize,
}

impl LineReaderBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            separator: DEFAULT_SEPARATOR,
            max_sources: DEFAULT_MAX_SOURCES,
        }
    }

    /// Sets the maximum number of bytes requested per raw read.
    ///
    /// Only the number of raw reads depends on it, never the lines returned.
    /// Must be positive, checked by [build()](LineReaderBuilder::build).
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets the byte that ends a line.
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Sets how many source identifiers are accepted (`0..max_sources`).
    pub fn with_max_sources(mut self, max_sources: usize) -> Self {
        self.max_sources = max_sources;
        self
    }

    /// Builds the [LineReader].
    ///
    /// # Errors
    /// [LineError::InvalidChunkSize] if the chunk size is zero.
    pub fn build(self) -> Result<LineReader, LineError> {
        if self.chunk_size == 0 {
            return Err(LineError::InvalidChunkSize(self.chunk_size));
        }
        Ok(LineReader {
            registry: SourceRegistry::new(self.max_sources),
            chunk_size: self.chunk_size,
            separator: self.separator,
        })
    }
}

impl Default for LineReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =#========================================================================#=
// LINE READER
// =#========================================================================$=
/// Returns the lines of many sources one at a time, carrying partial lines
/// over between calls.
///
/// Each source identifier owns a pending buffer in the reader's
/// [SourceRegistry]. Sources themselves stay with the caller, who passes the
/// matching source on every call and is responsible for opening and closing
/// it.
///
/// Identifiers must not be reused for a different source while residual
/// state exists: either read the old source to exhaustion (`Ok(None)`) or
/// call [release()](LineReader::release) first. Otherwise the leftover bytes
/// of the old source are returned in front of the new one.
#[derive(Debug, Clone)]
pub struct LineReader {
    registry: SourceRegistry,
    chunk_size: usize,
    separator: u8,
}

impl LineReader {
    /// Creates a reader with default settings.
    pub fn new() -> Self {
        Self {
            registry: SourceRegistry::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Returns the next line of the source `id`.
    ///
    /// # Arguments
    /// * `id` - Identifier of the source, in `0..max_sources`
    /// * `source` - The source behind `id`
    ///
    /// # Returns
    /// * `Ok(Some(line))` - The next line, ending with the separator unless
    ///   the source ended without one
    /// * `Ok(None)` - No more data; the state of `id` is reset
    ///
    /// # Errors
    /// * [LineError::InvalidSource] - `id` out of range, nothing touched
    /// * [LineError::ReadError], [LineError::AllocationFailure] - The state
    ///   of `id` is reset so the next call starts from an empty buffer
    ///
    /// # Example
    /// ```
    /// use nextline::reader::{InMemorySource, LineReader};
    ///
    /// let mut reader = LineReader::new();
    /// let mut source = InMemorySource::for_str("ab\nf");
    /// assert_eq!(reader.read_next_line(3, &mut source)?, Some(b"ab\n".to_vec()));
    /// assert_eq!(reader.read_next_line(3, &mut source)?, Some(b"f".to_vec()));
    /// assert_eq!(reader.read_next_line(3, &mut source)?, None);
    /// # Ok::<(), nextline::reader::LineError>(())
    /// ```
    pub fn read_next_line<S: RawSource + ?Sized>(
        &mut self,
        id: SourceId,
        source: &mut S,
    ) -> Result<Option<Vec<u8>>, LineError> {
        // Owned by this call from here on; the entry is absent until stored back
        let mut pending = self.registry.take_pending(id)?;
        if pending.is_empty() {
            debug!("source {id}: pending buffer created");
        }

        let status = match fill(id, source, &mut pending, self.chunk_size, self.separator) {
            Ok(status) => status,
            Err(err) => {
                debug!("source {id}: pending buffer discarded ({} bytes)", pending.len());
                return Err(err);
            }
        };
        if status.outcome == FillOutcome::Exhausted && pending.is_empty() {
            debug!("source {id}: exhausted");
        }

        let (line, remainder) = split_pending(pending, self.separator);
        if remainder.as_ref().is_none_or(Vec::is_empty) {
            debug!("source {id}: pending buffer released");
        }
        self.registry.set_pending(id, remainder)?;
        Ok(line)
    }

    /// Returns an iterator over the remaining lines of source `id`.
    ///
    /// The iterator ends after the source is exhausted or after yielding the
    /// first error.
    pub fn lines<'a, S: RawSource + ?Sized>(
        &'a mut self,
        id: SourceId,
        source: &'a mut S,
    ) -> Lines<'a, S> {
        Lines {
            reader: self,
            id,
            source,
            done: false,
        }
    }

    /// Drops any pending bytes of `id`, returning it to the unopened state.
    pub fn release(&mut self, id: SourceId) -> Result<(), LineError> {
        self.registry.clear(id)
    }

    /// Whether `id` holds bytes that have been read but not yet returned.
    pub fn has_pending(&self, id: SourceId) -> Result<bool, LineError> {
        self.registry.has_pending(id)
    }

    /// Number of sources currently holding pending bytes.
    pub fn open_sources(&self) -> usize {
        self.registry.open_sources()
    }

    /// Maximum number of bytes requested per raw read.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// The line separator byte.
    pub fn separator(&self) -> u8 {
        self.separator
    }

    /// Number of accepted identifiers.
    pub fn max_sources(&self) -> usize {
        self.registry.max_sources()
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}

// =#========================================================================#=
// LINES (Iterator)
// =#========================================================================$=
/// Iterator over the lines of one source, created by [LineReader::lines].
pub struct Lines<'a, S: RawSource + ?Sized> {
    reader: &'a mut LineReader,
    id: SourceId,
    source: &'a mut S,
    done: bool,
}

impl<S: RawSource + ?Sized> Iterator for Lines<'_, S> {
    type Item = Result<Vec<u8>, LineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_next_line(self.id, &mut *self.source) {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
