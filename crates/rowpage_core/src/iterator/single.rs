//! Single-value and invalid iterators.

use super::RowIterator;
use crate::error::{CoreError, CoreResult};
use crate::row_id::RowId;
use bytes::Bytes;
use rowpage_codec::Decode;

/// Yields one record, then [`CoreError::IteratorDone`] forever.
///
/// Built by point lookups: an absent or empty buffer means the row was not
/// found, and the iterator is exhausted from the start.
#[derive(Debug, Clone)]
pub struct SingleValueIterator {
    row_id: RowId,
    value: Option<Bytes>,
}

impl SingleValueIterator {
    /// Creates an iterator over one encoded record.
    #[must_use]
    pub fn new(row_id: RowId, value: Option<Bytes>) -> Self {
        let value = value.filter(|v| !v.is_empty());
        Self { row_id, value }
    }
}

impl RowIterator for SingleValueIterator {
    fn load_next(&mut self, dest: &mut dyn Decode) -> CoreResult<RowId> {
        // The value is consumed even if decoding fails.
        let value = self.value.take().ok_or(CoreError::IteratorDone)?;
        dest.decode_from(&value)?;
        Ok(self.row_id.clone())
    }

    fn close(&mut self) -> CoreResult<()> {
        self.value = None;
        Ok(())
    }
}

/// Returns [`CoreError::IteratorInvalid`] on every call.
///
/// Stands in for a query that can never run, such as one over a malformed
/// index key, so callers can tell a bad query from an empty result.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvalidIterator;

impl InvalidIterator {
    /// Creates an invalid iterator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RowIterator for InvalidIterator {
    fn load_next(&mut self, _dest: &mut dyn Decode) -> CoreResult<RowId> {
        Err(CoreError::IteratorInvalid)
    }

    fn close(&mut self) -> CoreResult<()> {
        Ok(())
    }
}
