//! The iterator contract and its combinators.
//!
//! A [`RowIterator`] is a single-use, closeable cursor that decodes one
//! record at a time into a caller-supplied destination. It owns no storage
//! itself; the storage layer builds iterators already positioned over the
//! rows a query selected.
//!
//! End of data is reported as [`CoreError::IteratorDone`](crate::CoreError::IteratorDone), and once an
//! iterator has reported it, every later call reports it again.

mod buffered;
mod func;
mod limited;
mod records;
mod single;

pub use buffered::BufferedIterator;
pub use func::IteratorFn;
pub use limited::LimitedIterator;
pub use records::{Records, RowIteratorExt};
pub use single::{InvalidIterator, SingleValueIterator};

use crate::error::CoreResult;
use crate::row_id::RowId;
use rowpage_codec::Decode;
use tracing::warn;

/// A sequential cursor over encoded records.
///
/// # Contract
///
/// - `load_next` decodes the next record into `dest` and returns its row ID
/// - exhaustion is signalled by [`CoreError::IteratorDone`](crate::CoreError::IteratorDone) and is sticky
/// - decode failures are returned as [`CoreError::Codec`](crate::CoreError::Codec) unchanged
/// - `close` releases whatever the iterator holds and may be called again
///   without effect
///
/// Iterators are owned by one consumer and are not meant to be shared
/// across threads while in use.
pub trait RowIterator {
    /// Decodes the next record into `dest` and returns its row ID.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IteratorDone`](crate::CoreError::IteratorDone) when no records remain, or the
    /// error that prevented loading the record.
    fn load_next(&mut self, dest: &mut dyn Decode) -> CoreResult<RowId>;

    /// Releases the iterator.
    ///
    /// # Errors
    ///
    /// Returns an error if an underlying resource failed to close.
    fn close(&mut self) -> CoreResult<()>;
}

impl<I: RowIterator + ?Sized> RowIterator for Box<I> {
    fn load_next(&mut self, dest: &mut dyn Decode) -> CoreResult<RowId> {
        (**self).load_next(dest)
    }

    fn close(&mut self) -> CoreResult<()> {
        (**self).close()
    }
}

/// Closes `it` and merges the close outcome into `result`.
///
/// A close failure is returned when the operation itself succeeded. When
/// both failed the primary error wins and the close failure is logged.
pub(crate) fn close_into<I, T>(it: &mut I, result: CoreResult<T>) -> CoreResult<T>
where
    I: RowIterator + ?Sized,
{
    match (result, it.close()) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            warn!(error = %err, close_error = %close_err, "iterator close failed after error");
            Err(err)
        }
    }
}

/// Owns an iterator for the duration of one retrieval and closes it
/// exactly once.
///
/// [`IteratorGuard::finish`] closes on the normal return path. If the guard
/// is dropped without finishing, for example while unwinding, it closes from
/// `Drop` and logs any failure.
pub(crate) struct IteratorGuard<I: RowIterator> {
    it: I,
    closed: bool,
}

impl<I: RowIterator> IteratorGuard<I> {
    pub(crate) fn new(it: I) -> Self {
        Self { it, closed: false }
    }

    pub(crate) fn load_next(&mut self, dest: &mut dyn Decode) -> CoreResult<RowId> {
        self.it.load_next(dest)
    }

    pub(crate) fn finish<T>(mut self, result: CoreResult<T>) -> CoreResult<T> {
        self.closed = true;
        close_into(&mut self.it, result)
    }
}

impl<I: RowIterator> Drop for IteratorGuard<I> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(err) = self.it.close() {
            warn!(error = %err, "iterator close failed on drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::testing::{entries, Tracked};

    #[test]
    fn boxed_iterator_delegates() {
        let (tracked, probe) = Tracked::new(entries(2));
        let mut boxed: Box<dyn RowIterator> = Box::new(tracked);
        let mut dest = String::new();

        assert_eq!(boxed.load_next(&mut dest).unwrap(), RowId::from_u64(1));
        assert_eq!(dest, "record-1");
        boxed.close().unwrap();
        assert_eq!(probe.loads(), 1);
        assert_eq!(probe.closes(), 1);
    }

    #[test]
    fn guard_closes_once_on_finish() {
        let (tracked, probe) = Tracked::new(entries(1));
        let guard = IteratorGuard::new(tracked);
        guard.finish(Ok(())).unwrap();
        assert_eq!(probe.closes(), 1);
    }

    #[test]
    fn guard_closes_on_drop() {
        let (tracked, probe) = Tracked::new(entries(1));
        drop(IteratorGuard::new(tracked));
        assert_eq!(probe.closes(), 1);
    }

    #[test]
    fn close_failure_surfaces_after_success() {
        let (tracked, _probe) = Tracked::failing_close(entries(0));
        let err = IteratorGuard::new(tracked).finish(Ok(())).unwrap_err();
        assert!(matches!(err, CoreError::Storage { .. }));
    }

    #[test]
    fn close_failure_does_not_mask_primary_error() {
        let (tracked, probe) = Tracked::failing_close(entries(0));
        let err = IteratorGuard::new(tracked)
            .finish::<()>(Err(CoreError::IteratorInvalid))
            .unwrap_err();
        assert!(err.is_invalid());
        assert_eq!(probe.closes(), 1);
    }
}
