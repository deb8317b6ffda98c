//! Count-bounded iterator.

use super::RowIterator;
use crate::error::{CoreError, CoreResult};
use crate::row_id::RowId;
use rowpage_codec::Decode;

/// Returns at most `max` records from a parent iterator.
///
/// Once the budget is spent the iterator reports
/// [`CoreError::IteratorDone`] without asking the parent for another
/// record. Closing closes the parent.
#[derive(Debug)]
pub struct LimitedIterator<I> {
    remaining: usize,
    parent: I,
}

impl<I: RowIterator> LimitedIterator<I> {
    /// Wraps `parent` so that it yields at most `max` records.
    ///
    /// `max` may be zero, in which case the parent is never read.
    #[must_use]
    pub fn new(parent: I, max: usize) -> Self {
        Self {
            remaining: max,
            parent,
        }
    }

    /// Returns how many more records may be loaded.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns the wrapped iterator without closing it.
    pub fn into_inner(self) -> I {
        self.parent
    }
}

impl<I: RowIterator> RowIterator for LimitedIterator<I> {
    fn load_next(&mut self, dest: &mut dyn Decode) -> CoreResult<RowId> {
        if self.remaining == 0 {
            return Err(CoreError::IteratorDone);
        }
        self.remaining -= 1;
        self.parent.load_next(dest)
    }

    fn close(&mut self) -> CoreResult<()> {
        self.parent.close()
    }
}
