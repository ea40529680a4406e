//! Error types for incremental line reading.
//!
//! This module provides [LineError] and [LineErrorKind]. End of a source is
//! never an error: it is reported as `Ok(None)` by
//! [LineReader::read_next_line](crate::reader::LineReader::read_next_line).

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

use crate::reader::registry::SourceId;

// =#========================================================================#=
// LINE ERROR KIND
// =#========================================================================$=
/// Discriminant of a [LineError], cheap to copy and compare.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum LineErrorKind {
    InvalidSource,
    ReadError,
    AllocationFailure,
    InvalidChunkSize,
    Io,
}

// =#========================================================================#=
// LINE ERROR
// =#========================================================================$=
/// Errors reported while reading lines from a source.
#[derive(Error, Debug)]
pub enum LineError {
    /// Identifier is negative or not below the registry capacity.
    /// No state was touched.
    #[error("invalid source identifier {id} (valid range is 0..{max_sources})")]
    InvalidSource { id: SourceId, max_sources: usize },

    /// The raw source reported a failure while filling. The pending state
    /// of `id` has been discarded.
    #[error("read error on source {id}: {source}")]
    ReadError {
        id: SourceId,
        #[source]
        source: io::Error,
    },

    /// Growing the pending buffer failed. The pending state of `id` has
    /// been discarded.
    #[error("could not grow pending buffer of source {id} by {requested} bytes")]
    AllocationFailure {
        id: SourceId,
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// A chunk size of zero was configured.
    #[error("chunk size must be positive, got {0}")]
    InvalidChunkSize(usize),

    /// Opening a source failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl LineError {
    /// Get the error kind
    pub fn kind(&self) -> LineErrorKind {
        match self {
            LineError::InvalidSource { .. } => LineErrorKind::InvalidSource,
            LineError::ReadError { .. } => LineErrorKind::ReadError,
            LineError::AllocationFailure { .. } => LineErrorKind::AllocationFailure,
            LineError::InvalidChunkSize(_) => LineErrorKind::InvalidChunkSize,
            LineError::Io(_) => LineErrorKind::Io,
        }
    }

    /// Get the source identifier the error occurred on, if any
    pub fn source_id(&self) -> Option<SourceId> {
        match self {
            LineError::InvalidSource { id, .. }
            | LineError::ReadError { id, .. }
            | LineError::AllocationFailure { id, .. } => Some(*id),
            LineError::InvalidChunkSize(_) | LineError::Io(_) => None,
        }
    }
}
