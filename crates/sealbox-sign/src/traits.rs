/// Produces and verifies signatures over byte sequences.
///
/// The signature format and size are signer-specific and opaque to callers.
/// Invariant: `verify(data, &sign(data))` is `true` for the same signer
/// instance and unmodified `data`.
///
/// `verify` never errors: mismatches, malformed blobs, and wrong-sized
/// signatures all return `false`. Implementations hold only immutable key
/// material, so sharing across threads is safe.
pub trait Signer: Send + Sync {
    /// Sign a byte sequence, returning an opaque signature blob.
    fn sign(&self, data: &[u8]) -> Vec<u8>;

    /// Verify a byte sequence against a signature blob.
    fn verify(&self, data: &[u8], signature: &[u8]) -> bool;
}
