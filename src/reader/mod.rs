//! Incremental, line-oriented reading of raw byte sources.
//!
//! A [LineReader] keeps one pending buffer per source identifier in a
//! [SourceRegistry]. Each call fills that buffer from a [RawSource] until it
//! holds a separator (or the source is exhausted), splits off the next line
//! and stores the remainder for the following call.
pub mod extractor;
pub mod filler;
pub mod in_memory_source;
pub mod line_error;
pub mod line_reader;
pub mod raw_source;
pub mod reader_source;
pub mod registry;

pub use in_memory_source::InMemorySource;
pub use line_error::{LineError, LineErrorKind};
pub use line_reader::{LineReader, LineReaderBuilder, Lines};
pub use raw_source::RawSource;
pub use reader_source::ReaderSource;
pub use registry::{SourceId, SourceRegistry};
