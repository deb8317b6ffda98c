//! Page request and response shapes.

use crate::row_id::RowId;
use serde::{Deserialize, Serialize};

/// Which slice of a result set to return.
///
/// Either `offset` or `key` selects the start of the page, never both. A
/// `key` is the `next_key` of a previous response; the storage layer uses
/// it to position the iterator before pagination starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageRequest {
    /// Number of leading records to skip.
    pub offset: u64,
    /// Cursor to resume from.
    pub key: Option<RowId>,
    /// Maximum records per page. Zero selects the default and a total.
    pub limit: u64,
    /// Whether to count all records. Ignored for cursor requests.
    pub count_total: bool,
}

impl PageRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the offset.
    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the cursor key.
    #[must_use]
    pub fn key(mut self, key: RowId) -> Self {
        self.key = Some(key);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Sets whether to count the total.
    #[must_use]
    pub const fn count_total(mut self, count_total: bool) -> Self {
        self.count_total = count_total;
        self
    }
}

/// Result metadata of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageResponse {
    /// Row ID of the first record after this page, if any.
    pub next_key: Option<RowId>,
    /// Total number of records, when it was counted.
    pub total: Option<u64>,
}

impl PageResponse {
    /// Returns true if another page follows.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next_key.is_some()
    }
}
