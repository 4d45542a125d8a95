use crate::error::TransformResult;

/// A reversible byte-sequence transform.
///
/// All implementations must satisfy these invariants:
/// - `reverse(apply(x)) == x` for every byte sequence `x` the processor is
///   used with.
/// - Per-call randomness (e.g. a fresh cipher nonce) is encoded into the
///   output of `apply`, so `reverse` is self-contained.
/// - `reverse` on input that was not produced by a matching `apply` fails
///   with [`TransformError::Malformed`](crate::TransformError::Malformed),
///   never returns garbage.
/// - Implementations hold no mutable state; sharing across threads is safe.
pub trait Processor: Send + Sync {
    /// Apply the forward transform.
    fn apply(&self, data: &[u8]) -> TransformResult<Vec<u8>>;

    /// Undo the forward transform.
    fn reverse(&self, data: &[u8]) -> TransformResult<Vec<u8>>;
}
