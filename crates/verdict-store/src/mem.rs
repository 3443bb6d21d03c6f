// crates/verdict-store/src/mem.rs
//
// Ordered in-memory key/value store.
//
// Backs unit tests and short-lived hosts. Iteration is cursor based: every
// `next()` re-enters the map just past the last key it returned, so no borrow
// is held between steps and writes made mid-iteration never panic.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ops::Bound;

use verdict_core::error::VerdictError;
use verdict_core::traits::{KvIter, KvPair, KvStore};

/// `BTreeMap`-backed store. Keys iterate in byte order.
#[derive(Debug, Default)]
pub struct MemStore {
    map: RefCell<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.map.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.borrow().is_empty()
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, VerdictError> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), VerdictError> {
        self.map.borrow_mut().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<(), VerdictError> {
        self.map.borrow_mut().remove(key);
        Ok(())
    }

    fn prefix_iter<'a>(&'a self, prefix: &[u8]) -> KvIter<'a> {
        Box::new(MemPrefixIter {
            map: &self.map,
            prefix: prefix.to_vec(),
            last: None,
            done: false,
        })
    }
}

struct MemPrefixIter<'a> {
    map: &'a RefCell<BTreeMap<Vec<u8>, Vec<u8>>>,
    prefix: Vec<u8>,
    last: Option<Vec<u8>>,
    done: bool,
}

impl Iterator for MemPrefixIter<'_> {
    type Item = Result<KvPair, VerdictError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let map = self.map.borrow();
        let lower = match &self.last {
            Some(last) => Bound::Excluded(last.as_slice()),
            None => Bound::Included(self.prefix.as_slice()),
        };
        let found = map
            .range::<[u8], _>((lower, Bound::Unbounded))
            .next()
            .filter(|(k, _)| k.starts_with(&self.prefix))
            .map(|(k, v)| (k.clone(), v.clone()));
        drop(map);

        match found {
            Some((key, value)) => {
                self.last = Some(key.clone());
                Some(Ok((key, value)))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(store: &MemStore, prefix: &[u8]) -> Vec<Vec<u8>> {
        store
            .prefix_iter(prefix)
            .map(|item| item.unwrap().0)
            .collect()
    }

    #[test]
    fn test_get_set_delete() {
        let store = MemStore::new();
        assert_eq!(store.get(b"a").unwrap(), None);
        store.set(b"a", b"1").unwrap();
        assert_eq!(store.get(b"a").unwrap(), Some(b"1".to_vec()));
        assert!(store.has(b"a").unwrap());
        store.delete(b"a").unwrap();
        assert!(!store.has(b"a").unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_prefix_iter_is_ordered_and_bounded() {
        let store = MemStore::new();
        store.set(b"b:2", b"").unwrap();
        store.set(b"a:1", b"").unwrap();
        store.set(b"b:1", b"").unwrap();
        store.set(b"c:1", b"").unwrap();

        assert_eq!(keys(&store, b"b:"), vec![b"b:1".to_vec(), b"b:2".to_vec()]);
        assert!(keys(&store, b"d:").is_empty());
        assert_eq!(keys(&store, b"").len(), 4);
    }

    #[test]
    fn test_write_during_iteration() {
        let store = MemStore::new();
        store.set(b"k:1", b"").unwrap();
        store.set(b"k:3", b"").unwrap();

        let mut iter = store.prefix_iter(b"k:");
        assert_eq!(iter.next().unwrap().unwrap().0, b"k:1".to_vec());
        store.set(b"k:2", b"").unwrap();
        assert_eq!(iter.next().unwrap().unwrap().0, b"k:2".to_vec());
        assert_eq!(iter.next().unwrap().unwrap().0, b"k:3".to_vec());
        assert!(iter.next().is_none());
    }
}
