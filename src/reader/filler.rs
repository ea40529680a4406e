//! Growing a pending buffer from a raw source until it holds a full line.

use std::io::ErrorKind;

use log::{trace, warn};

use crate::reader::extractor::find_separator;
use crate::reader::line_error::LineError;
use crate::reader::raw_source::RawSource;
use crate::reader::registry::SourceId;

/// Why filling stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// The pending buffer contains at least one separator.
    LineReady,
    /// The source returned zero bytes; the pending buffer holds whatever was
    /// left (possibly nothing, possibly a line without separator).
    Exhausted,
}

/// Result of one [fill] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillStatus {
    pub outcome: FillOutcome,
    /// Number of raw reads performed, including the final zero-byte read.
    pub raw_reads: usize,
}

/// Reads chunks of up to `chunk_size` bytes from `source` into `pending`
/// until `pending` contains `separator` or the source is exhausted.
///
/// The scratch chunk lives only for this call. Only the bytes reported by
/// each read are appended, and only newly appended bytes are scanned for the
/// separator. Interrupted reads are retried.
///
/// # Arguments
/// * `id` - Identifier of the source, for errors and logging
/// * `source` - The raw source to pull from
/// * `pending` - Bytes carried over from earlier calls; grown in place
/// * `chunk_size` - Maximum bytes per raw read, must be positive
/// * `separator` - The line separator byte
///
/// # Errors
/// * [LineError::InvalidChunkSize] - `chunk_size` is zero, nothing was read
/// * [LineError::ReadError] - The source reported a failure
/// * [LineError::AllocationFailure] - The scratch chunk could not be
///   allocated or `pending` could not grow
///
/// On error `pending` is left in an unspecified state; callers discard it.
pub fn fill<S: RawSource + ?Sized>(
    id: SourceId,
    source: &mut S,
    pending: &mut Vec<u8>,
    chunk_size: usize,
    separator: u8,
) -> Result<FillStatus, LineError> {
    if chunk_size == 0 {
        return Err(LineError::InvalidChunkSize(chunk_size));
    }

    let mut raw_reads = 0;
    if find_separator(pending, separator).is_some() {
        return Ok(FillStatus {
            outcome: FillOutcome::LineReady,
            raw_reads,
        });
    }

    let mut chunk = Vec::new();
    chunk.try_reserve_exact(chunk_size).map_err(|err| {
        warn!("source {id}: could not allocate a read chunk of {chunk_size} bytes");
        LineError::AllocationFailure {
            id,
            requested: chunk_size,
            source: err,
        }
    })?;
    chunk.resize(chunk_size, 0);
    loop {
        let n = match source.read_raw(&mut chunk) {
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                warn!("source {id}: raw read failed after {raw_reads} reads: {err}");
                return Err(LineError::ReadError { id, source: err });
            }
        };
        raw_reads += 1;
        trace!("source {id}: raw read #{raw_reads} returned {n} bytes");

        if n == 0 {
            return Ok(FillStatus {
                outcome: FillOutcome::Exhausted,
                raw_reads,
            });
        }

        pending.try_reserve(n).map_err(|err| {
            warn!("source {id}: could not grow pending buffer by {n} bytes");
            LineError::AllocationFailure {
                id,
                requested: n,
                source: err,
            }
        })?;
        let scan_from = pending.len();
        pending.extend_from_slice(&chunk[..n]);

        if find_separator(&pending[scan_from..], separator).is_some() {
            return Ok(FillStatus {
                outcome: FillOutcome::LineReady,
                raw_reads,
            });
        }
    }
}

// =#========================================================================#=
// TESTS - FILLER
// =#========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::in_memory_source::InMemorySource;
    use crate::reader::line_error::LineErrorKind;
    use std::io;

    /// Yields one `Interrupted` error, then delegates.
    struct InterruptOnce {
        interrupted: bool,
        inner: InMemorySource,
    }

    impl RawSource for InterruptOnce {
        fn read_raw(&mut self, chunk: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(ErrorKind::Interrupted));
            }
            self.inner.read_raw(chunk)
        }
    }

    struct Broken;

    impl RawSource for Broken {
        fn read_raw(&mut self, _chunk: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }
    }

    #[test]
    fn test_fill_stops_at_first_separator() {
        let mut source = InMemorySource::for_str("ab\ncde\nf");
        let mut pending = Vec::new();
        let status = fill(0, &mut source, &mut pending, 3, b'\n').unwrap();
        assert_eq!(status.outcome, FillOutcome::LineReady);
        assert_eq!(status.raw_reads, 1);
        assert_eq!(pending, b"ab\n");
    }

    #[test]
    fn test_fill_reads_several_chunks() {
        let mut source = InMemorySource::for_str("abcdefg\nh");
        let mut pending = Vec::new();
        let status = fill(0, &mut source, &mut pending, 2, b'\n').unwrap();
        assert_eq!(status.outcome, FillOutcome::LineReady);
        assert_eq!(status.raw_reads, 4);
        assert_eq!(pending, b"abcdefg\n");
    }

    #[test]
    fn test_fill_skips_reading_when_line_pending() {
        let mut source = InMemorySource::for_str("unread");
        let mut pending = b"ready\nrest".to_vec();
        let status = fill(0, &mut source, &mut pending, 4, b'\n').unwrap();
        assert_eq!(status.raw_reads, 0);
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn test_fill_exhausted() {
        let mut source = InMemorySource::for_str("tail");
        let mut pending = b"the ".to_vec();
        let status = fill(0, &mut source, &mut pending, 16, b'\n').unwrap();
        assert_eq!(status.outcome, FillOutcome::Exhausted);
        assert_eq!(status.raw_reads, 2);
        assert_eq!(pending, b"the tail");
    }

    #[test]
    fn test_fill_retries_interrupted() {
        let mut source = InterruptOnce {
            interrupted: false,
            inner: InMemorySource::for_str("x\n"),
        };
        let mut pending = Vec::new();
        let status = fill(0, &mut source, &mut pending, 8, b'\n').unwrap();
        assert_eq!(status.outcome, FillOutcome::LineReady);
        assert_eq!(pending, b"x\n");
    }

    #[test]
    fn test_fill_rejects_zero_chunk_size() {
        let mut source = InMemorySource::for_str("data\n");
        let mut pending = Vec::new();
        let err = fill(0, &mut source, &mut pending, 0, b'\n').unwrap_err();
        assert_eq!(err.kind(), LineErrorKind::InvalidChunkSize);
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn test_fill_unallocatable_chunk() {
        let mut source = InMemorySource::for_str("data\n");
        let mut pending = b"partial".to_vec();
        let err = fill(2, &mut source, &mut pending, usize::MAX, b'\n').unwrap_err();
        assert_eq!(err.kind(), LineErrorKind::AllocationFailure);
        assert_eq!(err.source_id(), Some(2));
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn test_fill_read_error() {
        let mut pending = b"partial".to_vec();
        let err = fill(7, &mut Broken, &mut pending, 8, b'\n').unwrap_err();
        assert_eq!(err.kind(), LineErrorKind::ReadError);
        assert_eq!(err.source_id(), Some(7));
    }
}
