//! Property-based test generators using proptest.

use proptest::prelude::*;
use rowpage_core::{PageRequest, RowId};

/// Strategy for generating row IDs.
pub fn row_id_strategy() -> impl Strategy<Value = RowId> {
    prop::collection::vec(any::<u8>(), 1..16).prop_map(|bytes| {
        RowId::new(bytes).expect("non-empty by construction")
    })
}

/// Strategy for offset-based page requests over tables of up to
/// `max_rows` rows.
///
/// Offsets and limits range slightly past `max_rows` so that
/// out-of-range windows are covered.
pub fn offset_request_strategy(max_rows: u64) -> impl Strategy<Value = PageRequest> {
    let bound = max_rows + 10;
    (0..bound, 0..bound, any::<bool>()).prop_map(|(offset, limit, count_total)| {
        PageRequest::new()
            .offset(offset)
            .limit(limit)
            .count_total(count_total)
    })
}

/// Configuration for property tests over generated tables.
///
/// Besides the proptest case budget this carries the largest table a case
/// may build, so table sizes and page requests are drawn from the same
/// bound.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
    /// Largest table, in rows, that a case builds.
    pub max_rows: u64,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
            max_rows: 250,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests over small tables.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
            max_rows: 60,
        }
    }

    /// Sets the largest table size.
    #[must_use]
    pub const fn max_rows(mut self, max_rows: u64) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Strategy for table sizes in `0..=max_rows`.
    pub fn table_rows(&self) -> impl Strategy<Value = u64> {
        0..=self.max_rows
    }

    /// Strategy for offset requests sized to tables of up to `max_rows`.
    pub fn offset_requests(&self) -> impl Strategy<Value = PageRequest> {
        offset_request_strategy(self.max_rows)
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn row_ids_are_never_empty(id in row_id_strategy()) {
            prop_assert!(!id.as_bytes().is_empty());
        }

        #[test]
        fn offset_requests_have_no_key(req in offset_request_strategy(50)) {
            prop_assert!(req.key.is_none());
            prop_assert!(req.offset < 60);
        }

        #[test]
        fn config_bounds_tables_and_requests(
            rows in PropTestConfig::quick().max_rows(20).table_rows(),
            req in PropTestConfig::quick().max_rows(20).offset_requests()
        ) {
            prop_assert!(rows <= 20);
            prop_assert!(req.offset < 30 && req.limit < 30);
        }
    }
}
