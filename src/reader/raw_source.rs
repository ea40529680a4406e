//! Raw byte source abstraction for line reading.
//!
//! This module provides the [RawSource] trait the filler pulls chunks from.
//! Implementations live in [reader_source](crate::reader::reader_source) and
//! [in_memory_source](crate::reader::in_memory_source).

use std::io;

// =#========================================================================#=
// RAW SOURCE (Trait)
// =#========================================================================T=
/// Trait defining a sequentially readable byte stream.
///
/// This trait abstracts over where the bytes come from:
/// - Anything implementing [std::io::Read] (files, pipes, stdin) via
///   [ReaderSource](crate::reader::ReaderSource)
/// - Owned in-memory bytes via [InMemorySource](crate::reader::InMemorySource)
///
/// The line reader never seeks; it only ever asks for the next bytes.
pub trait RawSource {
    /// Reads up to `chunk.len()` bytes into the front of `chunk`.
    ///
    /// # Returns
    /// * `Ok(0)` - The source is exhausted
    /// * `Ok(n)` - `n` bytes were written to `chunk[..n]`
    /// * `Err(e)` - The source failed
    fn read_raw(&mut self, chunk: &mut [u8]) -> io::Result<usize>;
}

impl<T: RawSource + ?Sized> RawSource for &mut T {
    fn read_raw(&mut self, chunk: &mut [u8]) -> io::Result<usize> {
        (**self).read_raw(chunk)
    }
}

impl<T: RawSource + ?Sized> RawSource for Box<T> {
    fn read_raw(&mut self, chunk: &mut [u8]) -> io::Result<usize> {
        (**self).read_raw(chunk)
    }
}
