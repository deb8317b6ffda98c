//! Error types for RowPage core.

use rowpage_codec::CodecError;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while iterating over or paginating records.
///
/// [`CoreError::IteratorDone`] is not a failure: it is the signal every
/// consumer must match to detect the end of a result set.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A null, mistyped or otherwise invalid argument was passed.
    #[error("invalid argument: {message}")]
    Argument {
        /// Which check failed.
        message: String,
    },

    /// The iterator has no more records.
    #[error("iterator done")]
    IteratorDone,

    /// The iterator was built from a query that can never run.
    #[error("iterator invalid")]
    IteratorInvalid,

    /// The page request is malformed.
    #[error("{message}")]
    InvalidRequest {
        /// Description of the request problem.
        message: String,
    },

    /// A record could not be decoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The storage layer behind an iterator failed.
    #[error("storage error: {message}")]
    Storage {
        /// Description of the failure.
        message: String,
    },
}

impl CoreError {
    /// Creates an argument error.
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Returns true if this is the end-of-iteration signal.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::IteratorDone)
    }

    /// Returns true if the iterator was built from an invalid query.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::IteratorInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn done_is_distinguishable() {
        assert!(CoreError::IteratorDone.is_done());
        assert!(!CoreError::IteratorInvalid.is_done());
        assert!(!CoreError::argument("x").is_done());
    }

    #[test]
    fn codec_errors_keep_their_message() {
        let err: CoreError = CodecError::decoding_failed("truncated").into();
        assert_eq!(err.to_string(), "codec error: decoding failed: truncated");
    }

    #[test]
    fn invalid_request_displays_message_only() {
        let err = CoreError::invalid_request("both set");
        assert_eq!(err.to_string(), "both set");
    }
}
