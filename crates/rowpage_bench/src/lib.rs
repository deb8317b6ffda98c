//! Benchmark utilities.

#![warn(missing_docs)]

use bytes::Bytes;
use rowpage_codec::Encode;
use rowpage_core::RowId;
use rowpage_testkit::GroupInfo;

/// Encodes `count` sample groups keyed `1..=count`.
///
/// # Panics
///
/// Panics if a sample fails to encode.
#[must_use]
pub fn encoded_groups(count: u64) -> Vec<(RowId, Bytes)> {
    (1..=count)
        .map(|i| {
            let bytes = GroupInfo::sample(i).encode().expect("sample must encode");
            (RowId::from_u64(i), Bytes::from(bytes))
        })
        .collect()
}
