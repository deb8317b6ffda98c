//! Closure-backed iterator.

use super::RowIterator;
use crate::error::CoreResult;
use crate::row_id::RowId;
use rowpage_codec::Decode;

type CloseHook = Box<dyn FnOnce() -> CoreResult<()>>;

/// An iterator backed by a closure.
///
/// `load_next` calls the closure. `close` does nothing unless a hook was
/// attached with [`IteratorFn::with_close`]; the hook runs on the first
/// close only.
pub struct IteratorFn<F> {
    load: F,
    on_close: Option<CloseHook>,
}

impl<F> IteratorFn<F>
where
    F: FnMut(&mut dyn Decode) -> CoreResult<RowId>,
{
    /// Creates an iterator that calls `load` for every record.
    pub fn new(load: F) -> Self {
        Self {
            load,
            on_close: None,
        }
    }

    /// Creates an iterator that also runs `on_close` when closed.
    pub fn with_close(load: F, on_close: impl FnOnce() -> CoreResult<()> + 'static) -> Self {
        Self {
            load,
            on_close: Some(Box::new(on_close)),
        }
    }
}

impl<F> RowIterator for IteratorFn<F>
where
    F: FnMut(&mut dyn Decode) -> CoreResult<RowId>,
{
    fn load_next(&mut self, dest: &mut dyn Decode) -> CoreResult<RowId> {
        (self.load)(dest)
    }

    fn close(&mut self) -> CoreResult<()> {
        match self.on_close.take() {
            Some(hook) => hook(),
            None => Ok(()),
        }
    }
}
