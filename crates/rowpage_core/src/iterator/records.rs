//! Adapter from [`RowIterator`] to [`std::iter::Iterator`].

use super::{close_into, RowIterator};
use crate::error::CoreResult;
use crate::row_id::RowId;
use rowpage_codec::Decode;
use std::marker::PhantomData;
use tracing::warn;

/// Typed records from a [`RowIterator`], as a standard iterator.
///
/// Yields `Ok((row_id, record))` until the source is exhausted. Any other
/// error is yielded once and ends the sequence. The source is closed as soon
/// as the sequence ends, or on drop if the caller stops early.
pub struct Records<I: RowIterator, T> {
    source: Option<I>,
    _marker: PhantomData<fn() -> T>,
}

impl<I: RowIterator, T> Records<I, T> {
    fn new(source: I) -> Self {
        Self {
            source: Some(source),
            _marker: PhantomData,
        }
    }
}

impl<I, T> Iterator for Records<I, T>
where
    I: RowIterator,
    T: Decode + Default,
{
    type Item = CoreResult<(RowId, T)>;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source.as_mut()?;
        let mut record = T::default();
        let result = match source.load_next(&mut record) {
            Ok(row_id) => return Some(Ok((row_id, record))),
            Err(err) if err.is_done() => Ok(()),
            Err(err) => Err(err),
        };

        let mut source = self.source.take()?;
        match close_into(&mut source, result) {
            Ok(()) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

impl<I: RowIterator, T> Drop for Records<I, T> {
    fn drop(&mut self) {
        if let Some(mut source) = self.source.take() {
            if let Err(err) = source.close() {
                warn!(error = %err, "iterator close failed on drop");
            }
        }
    }
}

/// Extension methods for every [`RowIterator`].
pub trait RowIteratorExt: RowIterator + Sized {
    /// Decodes every record as `T`.
    ///
    /// ```
    /// use rowpage_core::{BufferedIterator, RowId, RowIteratorExt};
    ///
    /// let it = BufferedIterator::new(vec![(RowId::from_u64(1), "a".into())]);
    /// let names: Vec<String> = it
    ///     .records::<String>()
    ///     .map(|r| r.map(|(_, name)| name))
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    /// assert_eq!(names, vec!["a".to_string()]);
    /// ```
    fn records<T: Decode + Default>(self) -> Records<Self, T> {
        Records::new(self)
    }
}

impl<I: RowIterator> RowIteratorExt for I {}
