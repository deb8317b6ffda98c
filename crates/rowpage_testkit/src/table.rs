//! Ordered in-memory table.
//!
//! Plays the part of the storage and index layer in tests: it keeps
//! encoded records keyed by [`RowId`] and hands out iterators over
//! snapshots of its contents.

use bytes::Bytes;
use parking_lot::RwLock;
use rowpage_codec::Encode;
use rowpage_core::{
    BufferedIterator, CoreResult, InvalidIterator, RowId, RowIterator, SingleValueIterator,
};
use std::collections::BTreeMap;
use std::ops::Bound;

/// An in-memory table of encoded records ordered by row ID.
///
/// # Thread Safety
///
/// The table can be shared across threads. Iterators copy the rows they
/// cover when created, so later writes never show up in them.
#[derive(Debug, Default)]
pub struct MemoryTable {
    rows: RwLock<BTreeMap<RowId, Bytes>>,
}

impl MemoryTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes and stores a record, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the record fails to encode.
    pub fn insert<R: Encode + ?Sized>(&self, row_id: RowId, record: &R) -> CoreResult<()> {
        let bytes = record.encode()?;
        self.insert_raw(row_id, Bytes::from(bytes));
        Ok(())
    }

    /// Stores an already encoded value.
    pub fn insert_raw(&self, row_id: RowId, value: Bytes) {
        self.rows.write().insert(row_id, value);
    }

    /// Removes a row, returning whether it existed.
    pub fn remove(&self, row_id: &RowId) -> bool {
        self.rows.write().remove(row_id).is_some()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Returns all row IDs in order.
    #[must_use]
    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.read().keys().cloned().collect()
    }

    /// Point lookup. Yields nothing if the row does not exist.
    #[must_use]
    pub fn get(&self, row_id: &RowId) -> SingleValueIterator {
        let value = self.rows.read().get(row_id).cloned();
        SingleValueIterator::new(row_id.clone(), value)
    }

    /// Iterates over every row in order.
    #[must_use]
    pub fn iter(&self) -> BufferedIterator {
        self.iter_from(None)
    }

    /// Iterates from `cursor` (inclusive) to the end.
    ///
    /// Passing a previous page's `next_key` resumes exactly where that page
    /// stopped.
    #[must_use]
    pub fn iter_from(&self, cursor: Option<&RowId>) -> BufferedIterator {
        let start = cursor.map_or(Bound::Unbounded, |key| Bound::Included(key.clone()));
        self.rows
            .read()
            .range((start, Bound::Unbounded))
            .map(|(id, value)| (id.clone(), value.clone()))
            .collect()
    }

    /// Iterates over rows whose ID starts with `prefix`.
    ///
    /// An empty prefix is a malformed key and yields an iterator that
    /// reports [`rowpage_core::CoreError::IteratorInvalid`].
    #[must_use]
    pub fn iter_prefix(&self, prefix: &[u8]) -> Box<dyn RowIterator> {
        if prefix.is_empty() {
            return Box::new(InvalidIterator::new());
        }
        let rows: BufferedIterator = self
            .rows
            .read()
            .iter()
            .filter(|(id, _)| id.as_bytes().starts_with(prefix))
            .map(|(id, value)| (id.clone(), value.clone()))
            .collect();
        Box::new(rows)
    }
}
