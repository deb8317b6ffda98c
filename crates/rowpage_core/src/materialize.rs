//! Accumulation of decoded records into a caller's container.
//!
//! A destination is a `&mut Vec<T>` with `T: Decode + Default`, so the
//! usual shape checks (present, a sequence, decodable elements, writable)
//! hold by construction. Elements may be boxed: `Box<T>` decodes through
//! the inner record.

/// Upper bound on capacity reserved from a page limit.
const MAX_PREALLOC: usize = 1024;

/// Working sequence filled during a scan and committed at the end.
///
/// Records are collected here first so the destination never holds a
/// partial result when a scan fails.
#[derive(Debug)]
pub struct SliceBuilder<T> {
    records: Vec<T>,
}

impl<T> Default for SliceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SliceBuilder<T> {
    /// Creates an empty working sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a working sequence sized for a page of `limit` records.
    #[must_use]
    pub fn for_limit(limit: u64) -> Self {
        let capacity = usize::try_from(limit).unwrap_or(usize::MAX).min(MAX_PREALLOC);
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Appends a decoded record.
    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// Returns the number of records collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replaces the contents of `dest` with the collected records.
    pub fn commit(self, dest: &mut Vec<T>) {
        *dest = self.records;
    }
}
