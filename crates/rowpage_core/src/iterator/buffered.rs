//! Iterator over pre-fetched records.

use super::RowIterator;
use crate::error::{CoreError, CoreResult};
use crate::row_id::RowId;
use bytes::Bytes;
use rowpage_codec::Decode;
use std::vec;

/// Iterates over an owned list of `(row id, encoded record)` pairs.
///
/// This is the shape a storage layer produces after a range read. Records
/// are decoded lazily, one per `load_next`. A record that fails to decode is
/// still consumed, so the next call moves on to the following entry.
#[derive(Debug)]
pub struct BufferedIterator {
    entries: vec::IntoIter<(RowId, Bytes)>,
}

impl BufferedIterator {
    /// Creates an iterator over `entries` in order.
    #[must_use]
    pub fn new(entries: Vec<(RowId, Bytes)>) -> Self {
        Self {
            entries: entries.into_iter(),
        }
    }

    /// Returns the number of records not yet loaded.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(RowId, Bytes)> for BufferedIterator {
    fn from_iter<T: IntoIterator<Item = (RowId, Bytes)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl RowIterator for BufferedIterator {
    fn load_next(&mut self, dest: &mut dyn Decode) -> CoreResult<RowId> {
        let (row_id, value) = self.entries.next().ok_or(CoreError::IteratorDone)?;
        dest.decode_from(&value)?;
        Ok(row_id)
    }

    fn close(&mut self) -> CoreResult<()> {
        self.entries = Vec::new().into_iter();
        Ok(())
    }
}
