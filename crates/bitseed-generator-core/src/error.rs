//! Error types for the Bitseed generator core.

use thiserror::Error;

/// Core errors that can occur while parsing, resolving, or encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The buffer does not decode as a well-formed value of the declared container.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A range definition whose bounds cannot be honored.
    #[error("invalid range for attribute {key:?}: min {min}, max {max}")]
    InvalidRange { key: String, min: i128, max: i128 },

    /// Serialization of an internally constructed value failed. Always a bug.
    #[error("internal encoding failure: {0}")]
    InternalEncoding(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
