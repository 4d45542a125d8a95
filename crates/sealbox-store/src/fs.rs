use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::ByteStore;

/// Filesystem-backed byte store.
///
/// Locations resolve to files under a root directory; slashes in a location
/// create subdirectories on write. Locations that are empty, absolute, or
/// contain `..` components are rejected before touching the filesystem.
pub struct FsByteStore {
    root: PathBuf,
}

impl FsByteStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open(root: &Path) -> StoreResult<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// The root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, location: &str) -> StoreResult<PathBuf> {
        if location.is_empty() {
            return Err(StoreError::InvalidLocation {
                location: location.to_string(),
                reason: "empty location".into(),
            });
        }
        let relative = Path::new(location);
        for component in relative.components() {
            match component {
                Component::Normal(_) => {}
                _ => {
                    return Err(StoreError::InvalidLocation {
                        location: location.to_string(),
                        reason: "location must be a plain relative path".into(),
                    });
                }
            }
        }
        Ok(self.root.join(relative))
    }
}

impl ByteStore for FsByteStore {
    fn read(&self, location: &str) -> StoreResult<Option<Vec<u8>>> {
        let path = self.resolve(location)?;
        match fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, location: &str, data: &[u8]) -> StoreResult<()> {
        let path = self.resolve(location)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, data)?;
        debug!(location, bytes = data.len(), "wrote blob");
        Ok(())
    }

    fn delete(&self, location: &str) -> StoreResult<bool> {
        let path = self.resolve(location)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(location, "deleted blob");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, location: &str) -> StoreResult<bool> {
        let path = self.resolve(location)?;
        Ok(path.exists())
    }
}

impl std::fmt::Debug for FsByteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsByteStore")
            .field("root", &self.root)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (FsByteStore, TempDir) {
        let dir = TempDir::new().expect("failed to create temp directory");
        let store = FsByteStore::open(dir.path()).unwrap();
        (store, dir)
    }

    #[test]
    fn write_and_read() {
        let (store, _dir) = temp_store();
        store.write("data.bin", b"hello").unwrap();
        assert_eq!(store.read("data.bin").unwrap(), Some(b"hello".to_vec()));
    }

    #[test]
    fn read_missing_returns_none() {
        let (store, _dir) = temp_store();
        assert!(store.read("missing.bin").unwrap().is_none());
    }

    #[test]
    fn nested_location_creates_parents() {
        let (store, _dir) = temp_store();
        store.write("a/b/c.bin", b"nested").unwrap();
        assert_eq!(store.read("a/b/c.bin").unwrap(), Some(b"nested".to_vec()));
    }

    #[test]
    fn delete_present_and_missing() {
        let (store, _dir) = temp_store();
        store.write("x.bin", b"x").unwrap();
        assert!(store.delete("x.bin").unwrap());
        assert!(!store.exists("x.bin").unwrap());
        assert!(!store.delete("x.bin").unwrap());
    }

    #[test]
    fn rejects_empty_location() {
        let (store, _dir) = temp_store();
        assert!(matches!(
            store.read("").unwrap_err(),
            StoreError::InvalidLocation { .. }
        ));
    }

    #[test]
    fn rejects_parent_traversal() {
        let (store, _dir) = temp_store();
        assert!(matches!(
            store.write("../escape.bin", b"nope").unwrap_err(),
            StoreError::InvalidLocation { .. }
        ));
        assert!(matches!(
            store.read("a/../../escape.bin").unwrap_err(),
            StoreError::InvalidLocation { .. }
        ));
    }

    #[test]
    fn rejects_absolute_location() {
        let (store, _dir) = temp_store();
        assert!(matches!(
            store.write("/etc/passwd", b"nope").unwrap_err(),
            StoreError::InvalidLocation { .. }
        ));
    }

    #[test]
    fn reopen_sees_existing_blobs() {
        let dir = TempDir::new().unwrap();
        {
            let store = FsByteStore::open(dir.path()).unwrap();
            store.write("persisted.bin", b"still here").unwrap();
        }
        let store = FsByteStore::open(dir.path()).unwrap();
        assert_eq!(
            store.read("persisted.bin").unwrap(),
            Some(b"still here".to_vec())
        );
    }
}
