//! [RawSource] implementation for anything implementing [Read].
//!
//! This module provides [ReaderSource], which hands raw reads straight to the
//! wrapped reader. No extra buffering happens here: the chunk size of the
//! [LineReader](crate::reader::LineReader) decides how much is requested per
//! read.

use std::fs::File;
use std::io::{self, Read, Stdin};
use std::path::Path;

use crate::reader::raw_source::RawSource;

// =#========================================================================#=
// READER SOURCE
// =#========================================================================$=
/// A raw source wrapping a [Read] implementation.
#[derive(Debug)]
pub struct ReaderSource<R: Read> {
    /// Underlying reader, asked for at most one chunk per raw read
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns a reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Unwraps this source, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl ReaderSource<File> {
    /// Opens a file for reading.
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

impl ReaderSource<Stdin> {
    /// Reads from standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<R: Read> RawSource for ReaderSource<R> {
    #[inline]
    fn read_raw(&mut self, chunk: &mut [u8]) -> io::Result<usize> {
        self.reader.read(chunk)
    }
}

// =#========================================================================#=
// TESTS - READER SOURCE
// =#========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_through_to_reader() {
        let mut source = ReaderSource::new(Cursor::new(b"hello".to_vec()));
        let mut chunk = [0u8; 3];
        assert_eq!(source.read_raw(&mut chunk).unwrap(), 3);
        assert_eq!(&chunk, b"hel");
        assert_eq!(source.read_raw(&mut chunk).unwrap(), 2);
        assert_eq!(&chunk[..2], b"lo");
        assert_eq!(source.read_raw(&mut chunk).unwrap(), 0);
    }

    #[test]
    fn test_from_file() {
        let mut source = ReaderSource::from_file("tests/fixtures/three_lines.txt").unwrap();
        let mut chunk = [0u8; 64];
        let n = source.read_raw(&mut chunk).unwrap();
        assert_eq!(&chunk[..n], b"first\nsecond\nthird\n");
    }

    #[test]
    fn test_from_missing_file() {
        assert!(ReaderSource::from_file("tests/fixtures/does_not_exist.txt").is_err());
    }
}
