//! Helpers shared by the unit tests.
//!
//! `rowpage_testkit` depends on this crate, so its `TrackedIterator` would
//! be a distinct type here; unit tests use this local copy instead.

use crate::error::{CoreError, CoreResult};
use crate::iterator::{BufferedIterator, RowIterator};
use crate::row_id::RowId;
use bytes::Bytes;
use rowpage_codec::Decode;
use std::cell::Cell;
use std::rc::Rc;

/// Text records `record-1..=record-n` keyed by big-endian ids `1..=n`.
pub(crate) fn entries(n: u64) -> Vec<(RowId, Bytes)> {
    (1..=n)
        .map(|i| (RowId::from_u64(i), Bytes::from(format!("record-{i}"))))
        .collect()
}

/// Counters observed by a [`Tracked`] iterator.
#[derive(Clone, Default)]
pub(crate) struct Probe {
    loads: Rc<Cell<usize>>,
    closes: Rc<Cell<usize>>,
}

impl Probe {
    pub(crate) fn loads(&self) -> usize {
        self.loads.get()
    }

    pub(crate) fn closes(&self) -> usize {
        self.closes.get()
    }
}

/// Buffered iterator that counts loads and closes.
pub(crate) struct Tracked {
    inner: BufferedIterator,
    probe: Probe,
    fail_close: bool,
}

impl Tracked {
    pub(crate) fn new(entries: Vec<(RowId, Bytes)>) -> (Self, Probe) {
        Self::build(entries, false)
    }

    pub(crate) fn failing_close(entries: Vec<(RowId, Bytes)>) -> (Self, Probe) {
        Self::build(entries, true)
    }

    fn build(entries: Vec<(RowId, Bytes)>, fail_close: bool) -> (Self, Probe) {
        let probe = Probe::default();
        let tracked = Self {
            inner: BufferedIterator::new(entries),
            probe: probe.clone(),
            fail_close,
        };
        (tracked, probe)
    }
}

impl RowIterator for Tracked {
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
