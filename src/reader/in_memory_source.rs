//! In-memory implementation of raw source.

use std::io;

use crate::reader::raw_source::RawSource;

// =#========================================================================#=
// IN MEMORY SOURCE
// =#========================================================================$=
/// A raw source that owns its data.
///
/// Optionally delivers at most `max_read` bytes per raw read, to behave like
/// a pipe or socket returning short reads.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    /// The owned bytes being read
    input: Vec<u8>,
    /// Current position in the bytes
    pos: usize,
    /// Upper bound on bytes delivered by a single read
    max_read: usize,
}

impl InMemorySource {
    /// Creates a new in-memory source from a Vec of bytes.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            input: bytes,
            pos: 0,
            max_read: usize::MAX,
        }
    }

    /// Creates a new in-memory source by copying a string.
    pub fn for_str(input: &str) -> Self {
        Self::from_vec(input.as_bytes().to_vec())
    }

    /// Limits each raw read to at most `max_read` bytes (at least one).
    pub fn with_max_read(mut self, max_read: usize) -> Self {
        self.max_read = max_read.max(1);
        self
    }

    /// Number of bytes handed out so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether all bytes have been handed out.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }
}

impl RawSource for InMemorySource {
    fn read_raw(&mut self, chunk: &mut [u8]) -> io::Result<usize> {
        let n = chunk
            .len()
            .min(self.max_read)
            .min(self.input.len() - self.pos);
        chunk[..n].copy_from_slice(&self.input[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
