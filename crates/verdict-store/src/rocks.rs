// crates/verdict-store/src/rocks.rs
//
// RocksDB-backed persistent key/value store.
//
// Used by the CLI to keep the slashing partition on disk between runs. Keys
// are stored verbatim; namespacing is layered on top with `PrefixStore`.

use rocksdb::{DBWithThreadMode, MultiThreaded, Options};

use verdict_core::error::VerdictError;
use verdict_core::traits::{KvIter, KvStore};

/// RocksDB wrapper implementing the `KvStore` trait.
#[derive(Debug)]
pub struct RocksStore {
    db: DBWithThreadMode<MultiThreaded>,
}

impl RocksStore {
    /// Open a RocksDB database at the given filesystem path.
    ///
    /// Creates the database directory if it does not exist.
    pub fn open(path: &str) -> Result<Self, VerdictError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DBWithThreadMode::<MultiThreaded>::open(&opts, path).map_err(|e| {
            VerdictError::Storage(format!("Failed to open RocksDB at {}: {}", path, e))
        })?;

        tracing::debug!("Opened RocksDB store at {}", path);
        Ok(Self { db })
    }
}

impl KvStore for RocksStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, VerdictError> {
        self.db
            .get(key)
            .map_err(|e| VerdictError::Storage(format!("RocksDB get failed: {}", e)))
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), VerdictError> {
        self.db
            .put(key, value)
            .map_err(|e| VerdictError::Storage(format!("RocksDB put failed: {}", e)))
    }

    fn delete(&self, key: &[u8]) -> Result<(), VerdictError> {
        self.db
            .delete(key)
            .map_err(|e| VerdictError::Storage(format!("RocksDB delete failed: {}", e)))
    }

    fn prefix_iter<'a>(&'a self, prefix: &[u8]) -> KvIter<'a> {
        let owned = prefix.to_vec();
        let iter = self
            .db
            .prefix_iterator(prefix.to_vec())
            .map(|item| {
                item.map(|(k, v)| (k.into_vec(), v.into_vec()))
                    .map_err(|e| VerdictError::Storage(format!("RocksDB iteration error: {}", e)))
            })
            // Without a prefix extractor RocksDB keeps going past the prefix.
            .take_while(move |item| match item {
                Ok((key, _)) => key.starts_with(&owned),
                Err(_) => true,
            });
        Box::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_db_path(label: &str) -> String {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("verdict_test_{}_{}", label, uuid::Uuid::now_v7()));
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_roundtrip_and_prefix_scan() {
        let path = temp_db_path("rocks");
        let store = RocksStore::open(&path).unwrap();

        store.set(b"slash:id:2", b"two").unwrap();
        store.set(b"slash:id:1", b"one").unwrap();
        store.set(b"slashing", b"other").unwrap();
        store.set(b"zzz", b"tail").unwrap();

        assert_eq!(store.get(b"slash:id:1").unwrap(), Some(b"one".to_vec()));
        let keys: Vec<Vec<u8>> = store
            .prefix_iter(b"slash:id:")
            .map(|item| item.unwrap().0)
            .collect();
        assert_eq!(keys, vec![b"slash:id:1".to_vec(), b"slash:id:2".to_vec()]);

        store.delete(b"slash:id:1").unwrap();
        assert_eq!(store.get(b"slash:id:1").unwrap(), None);

        drop(store);
        let _ = std::fs::remove_dir_all(&path);
    }
}
