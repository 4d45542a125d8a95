//! Signature capabilities for sealbox.
//!
//! A [`Signer`] produces an opaque signature blob for a byte sequence and
//! verifies a byte sequence against such a blob. Signers compose through
//! [`CompoundSigner`], which signs the same data with every constituent and
//! encodes all signatures into one self-describing blob.
//!
//! # Signers
//!
//! - [`Ed25519Signer`] -- asymmetric signatures (ed25519-dalek)
//! - [`MacSigner`] -- BLAKE3 keyed MAC, constant-time verification
//! - [`DigestSigner`] -- plain domain-tagged digest (corruption detection
//!   only, no authenticity)
//!
//! Verification never errors: a mismatch, a malformed blob, or a wrong-sized
//! signature all simply return `false`.
//!
//! All crypto operations wrap established libraries -- no custom
//! cryptography.

pub mod compound;
pub mod digest;
pub mod ed25519;
pub mod mac;
pub mod traits;

pub use compound::CompoundSigner;
pub use digest::DigestSigner;
pub use ed25519::Ed25519Signer;
pub use mac::MacSigner;
pub use traits::Signer;
