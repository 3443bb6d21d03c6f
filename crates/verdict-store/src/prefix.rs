// crates/verdict-store/src/prefix.rs
//
// Namespaced partition of a parent store.

use verdict_core::error::VerdictError;
use verdict_core::traits::{KvIter, KvStore};

/// Prepends a fixed namespace to every key of a parent store.
///
/// Each service gets its own partition (`slashing/`, `bank/`, ...) so keys
/// never collide across modules sharing one database.
#[derive(Debug)]
pub struct PrefixStore<S> {
    parent: S,
    prefix: Vec<u8>,
}

impl<S: KvStore> PrefixStore<S> {
    pub fn new(parent: S, prefix: impl Into<Vec<u8>>) -> Self {
        Self {
            parent,
            prefix: prefix.into(),
        }
    }

    pub fn namespace(&self) -> &[u8] {
        &self.prefix
    }

    fn full_key(&self, key: &[u8]) -> Vec<u8> {
        let mut full = Vec::with_capacity(self.prefix.len() + key.len());
        full.extend_from_slice(&self.prefix);
        full.extend_from_slice(key);
        full
    }
}

impl<S: KvStore> KvStore for PrefixStore<S> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, VerdictError> {
        self.parent.get(&self.full_key(key))
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), VerdictError> {
        self.parent.set(&self.full_key(key), value)
    }

    fn delete(&self, key: &[u8]) -> Result<(), VerdictError> {
        self.parent.delete(&self.full_key(key))
    }

    fn prefix_iter<'a>(&'a self, prefix: &[u8]) -> KvIter<'a> {
        let strip = self.prefix.len();
        let iter = self
            .parent
            .prefix_iter(&self.full_key(prefix))
            .map(move |item| item.map(|(key, value)| (key[strip..].to_vec(), value)));
        Box::new(iter)
    }
}
