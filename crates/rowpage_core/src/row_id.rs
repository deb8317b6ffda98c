//! Row identifier.

use crate::error::{CoreError, CoreResult};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary-store key of a record.
///
/// Row IDs are opaque, non-empty byte sequences. The core never interprets
/// them; it only passes them from iterators to callers and back as cursors.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "Bytes", try_from = "Bytes")]
pub struct RowId(Bytes);

impl RowId {
    /// Creates a row ID from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Argument`] if `bytes` is empty.
    pub fn new(bytes: impl Into<Bytes>) -> CoreResult<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(CoreError::argument("row id must not be empty"));
        }
        Ok(Self(bytes))
    }

    /// Creates a row ID from a big-endian `u64`.
    #[must_use]
    pub fn from_u64(id: u64) -> Self {
        Self(Bytes::copy_from_slice(&id.to_be_bytes()))
    }

    /// Returns the raw bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the underlying buffer.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Returns the number of bytes in the ID.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; row IDs are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<RowId> for Bytes {
    fn from(id: RowId) -> Self {
        id.0
    }
}

impl TryFrom<Bytes> for RowId {
    type Error = CoreError;

    fn try_from(bytes: Bytes) -> CoreResult<Self> {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for RowId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RowId({self})")
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
