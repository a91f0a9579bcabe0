//! Error types shared by the card model and the regulation table.
//!
//! Every failure in this crate is local and synchronous: it indicates a
//! programming error or bad input data, never a transient condition.

use thiserror::Error;

/// Errors produced by card construction, optional unwrapping, and JSON I/O.
#[derive(Debug, Error)]
pub enum CardError {
    /// A constructor received a value it cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was attempted on a value in the wrong state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A JSON document could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A value could not be encoded to JSON.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CardError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Whether this error came from decoding input data.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CardError>;
