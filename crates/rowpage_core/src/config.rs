//! Pagination configuration.

use crate::error::{CoreError, CoreResult};

/// Page size used when a request does not set a limit.
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Configuration for [`paginate_with`](crate::paginate_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page size substituted for a zero limit.
    ///
    /// Requests that rely on it also get a total count.
    pub default_limit: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PaginationConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default page size.
    #[must_use]
    pub const fn default_limit(mut self, limit: u64) -> Self {
        self.default_limit = limit;
        self
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Argument`] if the default limit is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.default_limit == 0 {
            return Err(CoreError::argument("default page limit must not be zero"));
        }
        Ok(())
    }
}
