use thiserror::Error;

/// Errors from transform operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The forward transform could not be applied.
    #[error("transform failed: {0}")]
    Apply(String),

    /// `reverse` was called on data not produced by a matching `apply`:
    /// truncated framing, a failed authentication tag, or undecodable input.
    #[error("malformed input: {0}")]
    Malformed(String),

    /// A keyed transform was constructed with an empty key.
    #[error("transform key must not be empty")]
    EmptyKey,
}

/// Result alias for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;
