//! Integrity-checked storage units for sealbox.
//!
//! A [`SignedFile`] binds an optional transform chain and a signer to a
//! storage location. On write, the payload is transformed, signed, and both
//! the transformed bytes and the signature are persisted as one logical
//! unit; on read, the signature is verified BEFORE the transform chain is
//! reversed, so corrupted or unsigned data is never exposed to the caller.
//!
//! # Storage Backends
//!
//! Physical persistence goes through the [`ByteStore`] trait ("read all
//! bytes / write all bytes / delete / exists"):
//!
//! - [`InMemoryByteStore`] -- `HashMap`-based store for tests and embedding
//! - [`FsByteStore`] -- files under a root directory
//!
//! # Design Rules
//!
//! 1. Fail closed: any verification failure surfaces immediately, and no
//!    partially-verified or partially-reversed data is returned.
//! 2. Verification failures are never retried; tampering cannot be resolved
//!    by rereading.
//! 3. The data blob and its signature sidecar are one logical unit. Their
//!    two writes are not atomic together; a crash between them leaves a
//!    pair that the next read rejects as a signature mismatch.

pub mod error;
pub mod fs;
pub mod memory;
pub mod signed;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use fs::FsByteStore;
pub use memory::InMemoryByteStore;
pub use signed::SignedFile;
pub use traits::ByteStore;
