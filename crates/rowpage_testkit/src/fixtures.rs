//! Record fixtures and instrumented iterators.

use crate::table::MemoryTable;
use rowpage_codec::{cbor_record, Decode};
use rowpage_core::{CoreError, CoreResult, RowId, RowIterator};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

/// A sample record type stored as CBOR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    /// Sequence number of the group.
    pub group_id: u64,
    /// Display name.
    pub name: String,
    /// Number of members.
    pub members: u32,
}

cbor_record!(GroupInfo);

impl GroupInfo {
    /// Builds the fixture for group `group_id`.
    #[must_use]
    pub fn sample(group_id: u64) -> Self {
        Self {
            group_id,
            name: format!("group-{group_id}"),
            members: (group_id % 7) as u32 + 1,
        }
    }
}

/// Creates a table holding `GroupInfo::sample(1..=n)` keyed by
/// `RowId::from_u64`.
///
/// # Panics
///
/// Panics if a fixture fails to encode.
#[must_use]
pub fn group_table(n: u64) -> MemoryTable {
    let table = MemoryTable::new();
    for i in 1..=n {
        table
            .insert(RowId::from_u64(i), &GroupInfo::sample(i))
            .expect("fixture must encode");
    }
    table
}

/// Counters shared between a [`TrackedIterator`] and the test.
#[derive(Debug, Clone, Default)]
pub struct IteratorProbe {
    loads: Rc<Cell<usize>>,
    closes: Rc<Cell<usize>>,
}

impl IteratorProbe {
    /// Number of `load_next` calls so far.
    #[must_use]
    pub fn loads(&self) -> usize {
        self.loads.get()
    }

    /// Number of `close` calls so far.
    #[must_use]
    pub fn closes(&self) -> usize {
        self.closes.get()
    }
}

/// Wraps an iterator and records how it was used.
pub struct TrackedIterator<I> {
    inner: I,
    probe: IteratorProbe,
    fail_close: bool,
}

impl<I: RowIterator> TrackedIterator<I> {
    /// Wraps `inner`, returning the wrapper and its probe.
    pub fn new(inner: I) -> (Self, IteratorProbe) {
        let probe = IteratorProbe::default();
        let tracked = Self {
            inner,
            probe: probe.clone(),
            fail_close: false,
        };
        (tracked, probe)
    }

    /// Makes `close` fail with a storage error after closing `inner`.
    #[must_use]
    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }
}

impl<I: RowIterator> RowIterator for TrackedIterator<I> {
    fn load_next(&mut self, dest: &mut dyn Decode) -> CoreResult<RowId> {
        self.probe.loads.set(self.probe.loads.get() + 1);
        self.inner.load_next(dest)
    }

    fn close(&mut self) -> CoreResult<()> {
        self.probe.closes.set(self.probe.closes.get() + 1);
        self.inner.close()?;
        if self.fail_close {
            return Err(CoreError::storage("cursor release failed"));
        }
        Ok(())
    }
}
