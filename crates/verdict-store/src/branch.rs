// crates/verdict-store/src/branch.rs
//
// Cache-wrapped branch of a parent store.
//
// A `BranchStore` is the state-transition boundary: the host runs one
// transition against the branch, then either calls `commit()` to flush every
// staged write to the parent in key order or drops the branch to discard
// them all. Reads see staged writes first, then the parent.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::iter::Peekable;
use std::ops::Bound;

use verdict_core::error::VerdictError;
use verdict_core::traits::{KvIter, KvPair, KvStore};

/// Staged value: `Some` for a write, `None` for a delete.
type Staged = BTreeMap<Vec<u8>, Option<Vec<u8>>>;

/// Write-staging overlay over a parent store.
#[derive(Debug)]
pub struct BranchStore<S> {
    parent: S,
    staged: RefCell<Staged>,
}

impl<S: KvStore> BranchStore<S> {
    pub fn new(parent: S) -> Self {
        Self {
            parent,
            staged: RefCell::new(BTreeMap::new()),
        }
    }

    /// Number of keys written or deleted since the branch was opened.
    pub fn pending(&self) -> usize {
        self.staged.borrow().len()
    }

    /// Flush staged writes to the parent and return it.
    pub fn commit(self) -> Result<S, VerdictError> {
        let staged = self.staged.into_inner();
        let count = staged.len();
        for (key, value) in staged {
            match value {
                Some(value) => self.parent.set(&key, &value)?,
                None => self.parent.delete(&key)?,
            }
        }
        tracing::debug!("Committed {} staged writes", count);
        Ok(self.parent)
    }

    /// Drop staged writes and return the untouched parent.
    pub fn discard(self) -> S {
        tracing::debug!("Discarded {} staged writes", self.staged.borrow().len());
        self.parent
    }
}

impl<S: KvStore> KvStore for BranchStore<S> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, VerdictError> {
        if let Some(staged) = self.staged.borrow().get(key) {
            return Ok(staged.clone());
        }
        self.parent.get(key)
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), VerdictError> {
        self.staged
            .borrow_mut()
            .insert(key.to_vec(), Some(value.to_vec()));
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<(), VerdictError> {
        self.staged.borrow_mut().insert(key.to_vec(), None);
        Ok(())
    }

    fn prefix_iter<'a>(&'a self, prefix: &[u8]) -> KvIter<'a> {
        Box::new(BranchIter {
            parent: self.parent.prefix_iter(prefix).peekable(),
            staged: &self.staged,
            prefix: prefix.to_vec(),
            staged_cursor: None,
        })
    }
}

/// Merges the parent's iterator with staged writes, staged entries winning.
struct BranchIter<'a> {
    parent: Peekable<KvIter<'a>>,
    staged: &'a RefCell<Staged>,
    prefix: Vec<u8>,
    /// Last staged key consumed.
    staged_cursor: Option<Vec<u8>>,
}

impl BranchIter<'_> {
    fn next_staged(&self) -> Option<(Vec<u8>, Option<Vec<u8>>)> {
        let staged = self.staged.borrow();
        let lower = match &self.staged_cursor {
            Some(cursor) => Bound::Excluded(cursor.as_slice()),
            None => Bound::Included(self.prefix.as_slice()),
        };
        staged
            .range::<[u8], _>((lower, Bound::Unbounded))
            .next()
            .filter(|(k, _)| k.starts_with(&self.prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
    }
}

impl Iterator for BranchIter<'_> {
    type Item = Result<KvPair, VerdictError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let parent_key = match self.parent.peek() {
                Some(Ok((key, _))) => Some(key.clone()),
                Some(Err(_)) => return self.parent.next(),
                None => None,
            };
            let staged = self.next_staged();

            let take_staged = match (&parent_key, &staged) {
                (None, None) => return None,
                (Some(_), None) => false,
                (None, Some(_)) => true,
                (Some(pk), Some((sk, _))) => {
                    if pk == sk {
                        // Shadowed by the staged entry.
                        self.parent.next();
                        true
                    } else {
                        sk < pk
                    }
                }
            };

            if !take_staged {
                return self.parent.next();
            }
            if let Some((key, value)) = staged {
                self.staged_cursor = Some(key.clone());
                if let Some(value) = value {
                    return Some(Ok((key, value)));
                }
                // Tombstone: skip and keep merging.
            }
        }
    }
}
