//! Table of pending buffers, one per open source identifier.

use std::collections::HashMap;

use log::debug;

use crate::reader::line_error::LineError;

/// Identifier of an open source, in the style of a raw file descriptor.
pub type SourceId = i32;

/// Default number of source identifiers a registry accepts (`0..1024`).
pub const DEFAULT_MAX_SOURCES: usize = 1024;

// =#========================================================================#=
// SOURCE REGISTRY
// =#========================================================================$=
/// Maps source identifiers to their pending, not yet returned bytes.
///
/// Entries are created lazily on first access and removed once a source is
/// exhausted or failed, so an absent entry and an empty buffer mean the same
/// thing: the identifier is in its "unopened" state. Empty buffers are never
/// stored.
///
/// Capacity is explicit: identifiers must lie in `0..max_sources`, anything
/// else is rejected with [LineError::InvalidSource] before any state is
/// touched.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    pending: HashMap<usize, Vec<u8>>,
    max_sources: usize,
}

impl SourceRegistry {
    /// Creates an empty registry accepting identifiers in `0..max_sources`.
    pub fn new(max_sources: usize) -> Self {
        Self {
            pending: HashMap::new(),
            max_sources,
        }
    }

    /// Number of identifiers this registry accepts.
    pub fn max_sources(&self) -> usize {
        self.max_sources
    }

    /// Checks `id` against the capacity and converts it to a table key.
    ///
    /// # Errors
    /// [LineError::InvalidSource] if `id` is negative or `>= max_sources`.
    pub fn validate(&self, id: SourceId) -> Result<usize, LineError> {
        match usize::try_from(id) {
            Ok(key) if key < self.max_sources => Ok(key),
            _ => Err(LineError::InvalidSource {
                id,
                max_sources: self.max_sources,
            }),
        }
    }

    /// Returns the pending buffer of `id`, creating an empty one if absent.
    pub fn get_pending(&mut self, id: SourceId) -> Result<&mut Vec<u8>, LineError> {
        let key = self.validate(id)?;
        Ok(self.pending.entry(key).or_default())
    }

    /// Moves the pending buffer of `id` out of the table.
    ///
    /// The entry is absent afterwards; an absent entry yields an empty buffer.
    pub fn take_pending(&mut self, id: SourceId) -> Result<Vec<u8>, LineError> {
        let key = self.validate(id)?;
        Ok(self.pending.remove(&key).unwrap_or_default())
    }

    /// Replaces the pending buffer of `id`.
    ///
    /// Passing `None` (or an empty buffer) removes the entry and frees its
    /// storage.
    pub fn set_pending(&mut self, id: SourceId, buffer: Option<Vec<u8>>) -> Result<(), LineError> {
        let key = self.validate(id)?;
        match buffer {
            Some(buffer) if !buffer.is_empty() => {
                self.pending.insert(key, buffer);
            }
            _ => {
                if self.pending.remove(&key).is_some() {
                    debug!("source {id}: pending buffer released");
                }
            }
        }
        Ok(())
    }

    /// Removes any pending state of `id`.
    pub fn clear(&mut self, id: SourceId) -> Result<(), LineError> {
        self.set_pending(id, None)
    }

    /// Whether `id` holds bytes not yet returned as a line.
    pub fn has_pending(&self, id: SourceId) -> Result<bool, LineError> {
        let key = self.validate(id)?;
        Ok(self.pending.get(&key).is_some_and(|buffer| !buffer.is_empty()))
    }

    /// Number of pending bytes held for `id`.
    pub fn pending_len(&self, id: SourceId) -> Result<usize, LineError> {
        let key = self.validate(id)?;
        Ok(self.pending.get(&key).map_or(0, Vec::len))
    }

    /// Number of identifiers currently holding pending bytes.
    pub fn open_sources(&self) -> usize {
        self.pending.values().filter(|buffer| !buffer.is_empty()).count()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SOURCES)
    }
}

// =#========================================================================#=
// TESTS - SOURCE REGISTRY
// =#========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::line_error::LineErrorKind;

    #[test]
    fn test_get_pending_creates_empty() {
        let mut registry = SourceRegistry::new(4);
        assert!(registry.get_pending(2).unwrap().is_empty());
        assert!(!registry.has_pending(2).unwrap());
    }

    #[test]
    fn test_set_and_take_pending() {
        let mut registry = SourceRegistry::new(4);
        registry.set_pending(1, Some(b"abc".to_vec())).unwrap();
        assert!(registry.has_pending(1).unwrap());
        assert_eq!(registry.pending_len(1).unwrap(), 3);
        assert_eq!(registry.open_sources(), 1);

        assert_eq!(registry.take_pending(1).unwrap(), b"abc");
        assert!(!registry.has_pending(1).unwrap());
        assert_eq!(registry.open_sources(), 0);
    }

    #[test]
    fn test_set_none_or_empty_removes() {
        let mut registry = SourceRegistry::new(4);
        registry.set_pending(0, Some(b"x".to_vec())).unwrap();
        registry.set_pending(0, Some(Vec::new())).unwrap();
        assert!(!registry.has_pending(0).unwrap());

        registry.set_pending(0, Some(b"y".to_vec())).unwrap();
        registry.clear(0).unwrap();
        assert_eq!(registry.pending_len(0).unwrap(), 0);
    }

    #[test]
    fn test_sources_are_independent() {
        let mut registry = SourceRegistry::new(4);
        registry.set_pending(0, Some(b"zero".to_vec())).unwrap();
        registry.set_pending(3, Some(b"three".to_vec())).unwrap();
        registry.get_pending(0).unwrap().push(b'!');

        assert_eq!(registry.take_pending(3).unwrap(), b"three");
        assert_eq!(registry.take_pending(0).unwrap(), b"zero!");
    }

    #[test]
    fn test_invalid_ids() {
        let mut registry = SourceRegistry::new(4);
        registry.set_pending(0, Some(b"keep".to_vec())).unwrap();

        for id in [-1, 4, i32::MIN, i32::MAX] {
            let err = registry.get_pending(id).unwrap_err();
            assert_eq!(err.kind(), LineErrorKind::InvalidSource);
            assert!(registry.set_pending(id, None).is_err());
            assert!(registry.take_pending(id).is_err());
        }
        assert_eq!(registry.take_pending(0).unwrap(), b"keep");
    }
}
