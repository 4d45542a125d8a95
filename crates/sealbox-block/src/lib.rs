//! Hash-verified nested data container.
//!
//! A [`HashedBlock`] is a tree whose nodes are either leaf [`Value`]s or
//! nested blocks, addressed by dot-separated paths (`"user.name"`). Reads
//! auto-create missing structure along the path -- a lookup of an absent
//! path yields an empty nested block, not an error.
//!
//! The serialized form is always the pair `(payload, digest)`: a versioned
//! binary encoding of the tree plus a domain-tagged BLAKE3 digest over those
//! exact bytes. Deserialization recomputes the digest first and refuses to
//! materialize the tree on mismatch -- a hard integrity gate, not a warning.

pub mod block;
pub mod error;
pub mod value;

pub use block::HashedBlock;
pub use error::{BlockError, BlockResult};
pub use value::{Entry, Value};
