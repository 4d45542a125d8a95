use crate::error::StoreResult;

/// External byte-storage collaborator.
///
/// A `ByteStore` addresses opaque byte blobs by string location. All
/// implementations must satisfy these invariants:
/// - `read` returns `Ok(None)` for a missing location, `Err` only on I/O
///   failure.
/// - `write` replaces any prior contents at the location.
/// - `delete` returns whether the location existed; deleting a missing
///   location is not an error.
/// - All calls are blocking; timeout and cancellation are caller concerns.
pub trait ByteStore: Send + Sync {
    /// Read all bytes at a location. `Ok(None)` if the location is absent.
    fn read(&self, location: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write all bytes to a location, replacing prior contents.
    fn write(&self, location: &str, data: &[u8]) -> StoreResult<()>;

    /// Delete a location. Returns `true` if it existed.
    fn delete(&self, location: &str) -> StoreResult<bool>;

    /// Check whether a location is present.
    fn exists(&self, location: &str) -> StoreResult<bool>;
}
