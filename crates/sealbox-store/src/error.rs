use sealbox_transform::TransformError;

/// Errors from storage-unit operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The data blob or its signature sidecar is missing.
    #[error("data not found, unable to verify integrity")]
    DataNotFound,

    /// The persisted signature does not verify against the persisted data.
    #[error("signature mismatch, unable to verify integrity")]
    SignatureMismatch,

    /// `create` without `exist_ok` on a unit that already exists.
    #[error("storage location already exists: {location}")]
    AlreadyExists { location: String },

    /// The location is empty, absolute, or escapes the store root.
    #[error("invalid storage location {location:?}: {reason}")]
    InvalidLocation { location: String, reason: String },

    /// Transform failure while applying or reversing the processor chain.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for storage-unit operations.
pub type StoreResult<T> = Result<T, StoreError>;
