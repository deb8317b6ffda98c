//! # RowPage Core
//!
//! Typed iteration and pagination over records kept as encoded blobs in a
//! key-value store.
//!
//! This crate provides:
//! - The [`RowIterator`] contract and its combinators
//! - [`first`], [`read_all`] and [`paginate`] for loading typed records
//! - Offset and cursor pagination through [`PageRequest`]/[`PageResponse`]
//!
//! Storage engines and index maintenance live elsewhere; they hand out
//! iterators already positioned over the selected rows.
//!
//! ## Example
//!
//! ```
//! use rowpage_core::{paginate, BufferedIterator, PageRequest, RowId};
//!
//! let rows = (1..=25u64)
//!     .map(|i| (RowId::from_u64(i), bytes::Bytes::from(format!("row {i}"))))
//!     .collect::<BufferedIterator>();
//!
//! let mut page: Vec<String> = Vec::new();
//! let req = PageRequest::new().offset(20).limit(10).count_total(true);
//! let res = paginate(rows, Some(&req), &mut page).unwrap();
//!
//! assert_eq!(page.len(), 5);
//! assert_eq!(res.next_key, None);
//! assert_eq!(res.total, Some(25));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
pub mod iterator;
mod materialize;
mod page;
mod retrieve;
mod row_id;

#[cfg(test)]
mod testing;

pub use config::{PaginationConfig, DEFAULT_PAGE_LIMIT};
pub use error::{CoreError, CoreResult};
pub use iterator::{
    BufferedIterator, InvalidIterator, IteratorFn, LimitedIterator, Records, RowIterator,
    RowIteratorExt, SingleValueIterator,
};
pub use materialize::SliceBuilder;
pub use page::{PageRequest, PageResponse};
pub use retrieve::{first, paginate, paginate_with, read_all};
pub use row_id::RowId;

// Re-exported so record types only need this crate.
pub use rowpage_codec::{CodecError, Decode, Encode};
