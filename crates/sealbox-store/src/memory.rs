use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::traits::ByteStore;

/// In-memory, HashMap-based byte store.
///
/// Intended for tests and embedding. All blobs are held in memory behind a
/// `RwLock` for safe concurrent access and are cloned on read.
pub struct InMemoryByteStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryByteStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// Number of blobs currently stored.
    pub fn len(&self) -> usize {
        self.blobs.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.blobs.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all stored blobs.
    pub fn total_bytes(&self) -> u64 {
        self.blobs
            .read()
            .expect("lock poisoned")
            .values()
            .map(|blob| blob.len() as u64)
            .sum()
    }

    /// Remove all blobs from the store.
    pub fn clear(&self) {
        self.blobs.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryByteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteStore for InMemoryByteStore {
    fn read(&self, location: &str) -> StoreResult<Option<Vec<u8>>> {
        let map = self.blobs.read().expect("lock poisoned");
        Ok(map.get(location).cloned())
    }

    fn write(&self, location: &str, data: &[u8]) -> StoreResult<()> {
        let mut map = self.blobs.write().expect("lock poisoned");
        map.insert(location.to_string(), data.to_vec());
        Ok(())
    }

    fn delete(&self, location: &str) -> StoreResult<bool> {
        let mut map = self.blobs.write().expect("lock poisoned");
        Ok(map.remove(location).is_some())
    }

    fn exists(&self, location: &str) -> StoreResult<bool> {
        let map = self.blobs.read().expect("lock poisoned");
        Ok(map.contains_key(location))
    }
}

impl std::fmt::Debug for InMemoryByteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryByteStore")
            .field("blob_count", &self.len())
            .finish()
    }
}
