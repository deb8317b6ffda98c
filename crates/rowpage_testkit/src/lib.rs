//! # RowPage Testkit
//!
//! Test utilities for RowPage.
//!
//! This crate provides:
//! - [`MemoryTable`], an ordered in-memory store that hands out iterators
//! - Sample record types and tracked iterators
//! - Property-based test generators using proptest
//! - Tracing setup for test runs
//!
//! ## Usage
//!
//! ```rust
//! use rowpage_core::read_all;
//! use rowpage_testkit::prelude::*;
//!
//! let table = group_table(3);
//! let mut groups: Vec<GroupInfo> = Vec::new();
//! let row_ids = read_all(table.iter(), &mut groups).unwrap();
//! assert_eq!(row_ids.len(), 3);
//! assert_eq!(groups[0].name, "group-1");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod logging;
pub mod table;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::logging::*;
    pub use crate::table::*;
}

pub use fixtures::*;
pub use generators::*;
pub use logging::*;
pub use table::*;
