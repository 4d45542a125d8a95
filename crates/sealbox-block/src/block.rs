use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{BlockError, BlockResult};
use crate::value::Entry;

/// Magic + version prefix of the serialized payload.
const MAGIC: &[u8; 4] = b"SBK1";

/// Domain tag mixed into the digest computation.
const DIGEST_DOMAIN: &str = "sealbox-block-v1";

/// Digest size in bytes (BLAKE3, 256-bit).
const DIGEST_SIZE: usize = 32;

/// Nested, dot-path-addressed container with a digest-gated encoding.
///
/// Entries live in a `BTreeMap`, so the serialized form is deterministic:
/// equal trees always encode to equal bytes and therefore equal digests.
///
/// Traversal auto-creates missing structure (write-on-read): `get` on an
/// absent path materializes empty nested blocks for every missing segment,
/// including the final one, and returns the freshly created empty block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedBlock {
    entries: BTreeMap<String, Entry>,
}

impl HashedBlock {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of direct entries (not recursive).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this block has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direct keys of this block, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Look up a dot-separated path, auto-creating missing structure.
    ///
    /// Every absent segment along the path -- including the final one -- is
    /// created as an empty nested block, so a pure lookup of a missing path
    /// returns an empty block rather than an error. Fails with
    /// [`BlockError::NotABlock`] if an intermediate segment holds a leaf
    /// value.
    pub fn get(&mut self, path: &str) -> BlockResult<&Entry> {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, parents) = segments.split_last().expect("split yields at least one segment");
        let parent = self.descend_or_create(parents)?;
        Ok(parent
            .entries
            .entry((*last).to_string())
            .or_insert_with(|| Entry::Block(HashedBlock::new())))
    }

    /// Assign an entry at a dot-separated path, auto-creating intermediate
    /// blocks. Replaces whatever was at the final segment, leaf or subtree.
    pub fn set(&mut self, path: &str, entry: impl Into<Entry>) -> BlockResult<()> {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, parents) = segments.split_last().expect("split yields at least one segment");
        let parent = self.descend_or_create(parents)?;
        parent.entries.insert((*last).to_string(), entry.into());
        Ok(())
    }

    /// Remove and return the entry at a dot-separated path.
    ///
    /// Unlike `get`/`set`, deletion creates nothing: it fails with
    /// [`BlockError::KeyNotFound`] if ANY segment, intermediate or final,
    /// is absent.
    pub fn delete(&mut self, path: &str) -> BlockResult<Entry> {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, parents) = segments.split_last().expect("split yields at least one segment");

        let mut current = self;
        for (depth, segment) in parents.iter().enumerate() {
            match current.entries.get_mut(*segment) {
                Some(Entry::Block(block)) => current = block,
                Some(Entry::Value(_)) => {
                    return Err(BlockError::NotABlock {
                        path: segments[..=depth].join("."),
                    });
                }
                None => {
                    return Err(BlockError::KeyNotFound {
                        path: path.to_string(),
                    });
                }
            }
        }
        current
            .entries
            .remove(*last)
            .ok_or_else(|| BlockError::KeyNotFound {
                path: path.to_string(),
            })
    }

    /// Serialize to the pair `(payload, digest)`.
    ///
    /// The payload is the magic/version prefix followed by the
    /// bincode-encoded tree; the digest is a domain-tagged BLAKE3 hash over
    /// those exact payload bytes.
    pub fn to_bytes(&self) -> BlockResult<(Vec<u8>, Vec<u8>)> {
        let mut payload = MAGIC.to_vec();
        let encoded =
            bincode::serialize(&self.entries).map_err(|e| BlockError::Codec(e.to_string()))?;
        payload.extend_from_slice(&encoded);
        let digest = digest_of(&payload).to_vec();
        Ok((payload, digest))
    }

    /// Deserialize from the pair `(payload, digest)`.
    ///
    /// The digest is recomputed over the supplied payload bytes and compared
    /// first; on mismatch nothing is constructed and
    /// [`BlockError::DigestMismatch`] is returned.
    pub fn from_bytes(payload: &[u8], digest: &[u8]) -> BlockResult<Self> {
        if digest.len() != DIGEST_SIZE {
            return Err(BlockError::InvalidDigestLength {
                expected: DIGEST_SIZE,
                actual: digest.len(),
            });
        }
        if digest_of(payload).as_slice() != digest {
            return Err(BlockError::DigestMismatch);
        }
        if payload.len() < MAGIC.len() || &payload[..MAGIC.len()] != MAGIC {
            return Err(BlockError::Codec("unrecognized payload header".into()));
        }
        let entries = bincode::deserialize(&payload[MAGIC.len()..])
            .map_err(|e| BlockError::Codec(e.to_string()))?;
        Ok(Self { entries })
    }

    /// Walk `segments`, creating empty nested blocks for missing ones.
    fn descend_or_create(&mut self, segments: &[&str]) -> BlockResult<&mut HashedBlock> {
        let mut current = self;
        for (depth, segment) in segments.iter().enumerate() {
            let entry = current
                .entries
                .entry((*segment).to_string())
                .or_insert_with(|| Entry::Block(HashedBlock::new()));
            match entry {
                Entry::Block(block) => current = block,
                Entry::Value(_) => {
                    return Err(BlockError::NotABlock {
                        path: segments[..=depth].join("."),
                    });
                }
            }
        }
        Ok(current)
    }
}

/// Domain-tagged BLAKE3 digest over payload bytes.
fn digest_of(payload: &[u8]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(DIGEST_DOMAIN.as_bytes());
    hasher.update(b":");
    hasher.update(payload);
    *hasher.finalize().as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn populated() -> HashedBlock {
        let mut block = HashedBlock::new();
        block.set("user.name", Value::from("Alyce")).unwrap();
        block.set("user.age", Value::Int(32)).unwrap();
        block.set("user.city", Value::from("New York")).unwrap();
        block.set("preferences.color", Value::from("blue")).unwrap();
        block.set("preferences.theme", Value::from("dark")).unwrap();
        block
    }

    // -----------------------------------------------------------------------
    // Path semantics
    // -----------------------------------------------------------------------

    #[test]
    fn set_then_get() {
        let mut block = HashedBlock::new();
        block.set("a.b.c", Value::Int(5)).unwrap();
        assert_eq!(block.get("a.b.c").unwrap().as_value(), Some(&Value::Int(5)));
    }

    #[test]
    fn top_level_path_has_no_dots() {
        let mut block = HashedBlock::new();
        block.set("answer", Value::Int(42)).unwrap();
        assert_eq!(block.get("answer").unwrap().as_value(), Some(&Value::Int(42)));
        assert_eq!(block.len(), 1);
    }

    #[test]
    fn get_on_missing_path_creates_empty_block() {
        let mut block = HashedBlock::new();
        let entry = block.get("a.b.x").unwrap();
        assert_eq!(entry.as_block(), Some(&HashedBlock::new()));

        // The lookup materialized structure (write-on-read).
        assert_eq!(block.len(), 1);
        assert!(block.get("a").unwrap().as_block().is_some());
    }

    #[test]
    fn get_through_leaf_fails() {
        let mut block = HashedBlock::new();
        block.set("a.b", Value::Int(1)).unwrap();
        let err = block.get("a.b.c").unwrap_err();
        assert_eq!(
            err,
            BlockError::NotABlock {
                path: "a.b".to_string()
            }
        );
    }

    #[test]
    fn set_replaces_whole_subtree() {
        let mut block = populated();
        block.set("user", Value::from("gone")).unwrap();
        assert_eq!(block.get("user").unwrap().as_value(), Some(&Value::from("gone")));
    }

    #[test]
    fn set_nested_block_entry() {
        let mut inner = HashedBlock::new();
        inner.set("x", Value::Int(1)).unwrap();

        let mut block = HashedBlock::new();
        block.set("outer.inner", inner.clone()).unwrap();
        assert_eq!(block.get("outer.inner").unwrap().as_block(), Some(&inner));
    }

    #[test]
    fn delete_then_get_returns_fresh_empty_block() {
        let mut block = HashedBlock::new();
        block.set("a.b.c", Value::Int(5)).unwrap();

        let removed = block.delete("a.b.c").unwrap();
        assert_eq!(removed.as_value(), Some(&Value::Int(5)));

        // Auto-create kicks in again; the old value is gone.
        assert_eq!(
            block.get("a.b.c").unwrap().as_block(),
            Some(&HashedBlock::new())
        );
    }

    #[test]
    fn delete_missing_final_segment_fails() {
        let mut block = HashedBlock::new();
        block.set("a.b", Value::Int(1)).unwrap();
        assert_eq!(
            block.delete("a.missing").unwrap_err(),
            BlockError::KeyNotFound {
                path: "a.missing".to_string()
            }
        );
    }

    #[test]
    fn delete_missing_intermediate_segment_fails() {
        let mut block = HashedBlock::new();
        block.set("a.b", Value::Int(1)).unwrap();
        let err = block.delete("missing.b").unwrap_err();
        assert_eq!(
            err,
            BlockError::KeyNotFound {
                path: "missing.b".to_string()
            }
        );
        // Deletion created nothing.
        assert_eq!(block.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Serialization and integrity
    // -----------------------------------------------------------------------

    #[test]
    fn serialization_roundtrip() {
        let block = populated();
        let (payload, digest) = block.to_bytes().unwrap();
        let restored = HashedBlock::from_bytes(&payload, &digest).unwrap();
        assert_eq!(restored, block);
    }

    #[test]
    fn empty_block_roundtrip() {
        let block = HashedBlock::new();
        let (payload, digest) = block.to_bytes().unwrap();
        assert_eq!(HashedBlock::from_bytes(&payload, &digest).unwrap(), block);
    }

    #[test]
    fn serialization_is_deterministic() {
        // Insertion order must not leak into the encoding.
        let mut a = HashedBlock::new();
        a.set("x", Value::Int(1)).unwrap();
        a.set("y", Value::Int(2)).unwrap();

        let mut b = HashedBlock::new();
        b.set("y", Value::Int(2)).unwrap();
        b.set("x", Value::Int(1)).unwrap();

        assert_eq!(a.to_bytes().unwrap(), b.to_bytes().unwrap());
    }

    #[test]
    fn wrong_digest_is_rejected() {
        let block = populated();
        let (payload, digest) = block.to_bytes().unwrap();

        let mut wrong = digest.clone();
        wrong[0] ^= 0x01;
        assert_eq!(
            HashedBlock::from_bytes(&payload, &wrong).unwrap_err(),
            BlockError::DigestMismatch
        );
    }

    #[test]
    fn wrong_digest_length_is_rejected() {
        let block = populated();
        let (payload, digest) = block.to_bytes().unwrap();
        assert_eq!(
            HashedBlock::from_bytes(&payload, &digest[..16]).unwrap_err(),
            BlockError::InvalidDigestLength {
                expected: 32,
                actual: 16
            }
        );
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let block = populated();
        let (mut payload, digest) = block.to_bytes().unwrap();
        let mid = payload.len() / 2;
        payload[mid] ^= 0x01;
        assert_eq!(
            HashedBlock::from_bytes(&payload, &digest).unwrap_err(),
            BlockError::DigestMismatch
        );
    }

    #[test]
    fn unrecognized_header_is_rejected() {
        // A correctly digested payload that is not an encoded tree must
        // still be refused by the codec layer.
        let payload = b"not a block payload".to_vec();
        let digest = super::digest_of(&payload).to_vec();
        assert!(matches!(
            HashedBlock::from_bytes(&payload, &digest).unwrap_err(),
            BlockError::Codec(_)
        ));
    }

    #[test]
    fn digest_differs_between_trees() {
        let a = populated();
        let mut b = populated();
        b.set("user.age", Value::Int(33)).unwrap();

        let (_, digest_a) = a.to_bytes().unwrap();
        let (_, digest_b) = b.to_bytes().unwrap();
        assert_ne!(digest_a, digest_b);
    }

    #[test]
    fn keys_are_sorted() {
        let block = populated();
        let keys: Vec<&str> = block.keys().collect();
        assert_eq!(keys, vec!["preferences", "user"]);
    }
}
