use thiserror::Error;

/// Errors from container operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockError {
    /// The supplied digest does not match the serialized payload.
    #[error("digest mismatch: data integrity compromised")]
    DigestMismatch,

    /// The supplied digest has the wrong length for the configured hash.
    #[error("invalid digest length: expected {expected}, got {actual}")]
    InvalidDigestLength { expected: usize, actual: usize },

    /// `delete` addressed a path with an absent segment.
    #[error("key not found: {path}")]
    KeyNotFound { path: String },

    /// A traversal ran into a leaf value where a nested block was needed.
    #[error("path segment holds a value, not a nested block: {path}")]
    NotABlock { path: String },

    /// The payload is not a valid encoded tree.
    #[error("codec error: {0}")]
    Codec(String),
}

/// Result alias for container operations.
pub type BlockResult<T> = Result<T, BlockError>;
