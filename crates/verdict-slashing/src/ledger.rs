// crates/verdict-slashing/src/ledger.rs
//
// Slash ledger: append-only slash records plus their derived indices.
//
// Every index entry stores the slash ID and is resolved against the primary
// record on read. Iteration is lazy and follows key order, which for
// zero-padded IDs is insertion order. Callers may stop early; entries past
// the stop point are never read.

use verdict_core::{Address, KvPair, KvStore, VerdictError};

use crate::error::SlashError;
use crate::keeper::{SlashKeeper, START_SLASH_ID};
use crate::keys;
use crate::types::Slash;

/// Lazy, finite sequence of slashes. Dropping it closes the underlying
/// store iterator.
pub type SlashIter<'s> = Box<dyn Iterator<Item = Result<Slash, SlashError>> + 's>;

impl<'a, S: KvStore> SlashKeeper<'a, S> {
    /// ID the next created slash will receive.
    pub fn next_slash_id(&self) -> Result<u64, SlashError> {
        Ok(self.read_json(keys::SLASH_ID_KEY)?.unwrap_or(START_SLASH_ID))
    }

    /// Look up a slash by ID.
    pub fn slash(&self, slash_id: u64) -> Result<Slash, SlashError> {
        self.read_json(&keys::slash_key(slash_id))?
            .ok_or(SlashError::SlashNotFound(slash_id))
    }

    /// Every slash, in ID order.
    pub fn iter_slashes(&self) -> SlashIter<'_> {
        let iter = self
            .store
            .prefix_iter(keys::SLASHES_PREFIX)
            .map(|item| -> Result<Slash, SlashError> {
                let (_, value) = item?;
                Ok(serde_json::from_slice(&value).map_err(VerdictError::from)?)
            });
        Box::new(iter)
    }

    pub fn slashes(&self) -> Result<Vec<Slash>, SlashError> {
        self.iter_slashes().collect()
    }

    /// Number of slashes filed against an argument.
    pub fn slash_count(&self, argument_id: u64) -> Result<u64, SlashError> {
        Ok(self
            .read_json(&keys::slash_count_key(argument_id))?
            .unwrap_or(0))
    }

    /// Slashes filed against an argument, in ID order.
    pub fn iter_argument_slashes(&self, argument_id: u64) -> SlashIter<'_> {
        self.resolve_index(keys::argument_slash_prefix(argument_id))
    }

    pub fn argument_slashes(&self, argument_id: u64) -> Result<Vec<Slash>, SlashError> {
        self.iter_argument_slashes(argument_id).collect()
    }

    /// Slashes one user filed against one argument. At most one entry.
    pub fn iter_argument_slasher_slashes(
        &self,
        argument_id: u64,
        slasher: &Address,
    ) -> SlashIter<'_> {
        self.resolve_index(keys::argument_slasher_prefix(argument_id, slasher))
    }

    pub fn argument_slasher_slashes(
        &self,
        slasher: &Address,
        argument_id: u64,
    ) -> Result<Vec<Slash>, SlashError> {
        self.iter_argument_slasher_slashes(argument_id, slasher)
            .collect()
    }

    /// Slashes a user has filed across all arguments.
    pub fn iter_creator_slashes(&self, creator: &Address) -> SlashIter<'_> {
        self.resolve_index(keys::creator_slash_prefix(creator))
    }

    pub fn creator_slashes(&self, creator: &Address) -> Result<Vec<Slash>, SlashError> {
        self.iter_creator_slashes(creator).collect()
    }

    /// Persist a new slash together with every index and advance the ID
    /// counter. The caller allocated `slash.id` from `next_slash_id`.
    pub(crate) fn record_slash(&self, slash: &Slash) -> Result<u64, SlashError> {
        self.write_json(&keys::slash_key(slash.id), slash)?;
        self.write_json(keys::SLASH_ID_KEY, &(slash.id + 1))?;
        self.write_json(&keys::creator_slash_key(&slash.creator, slash.id), &slash.id)?;
        let count = self.increment_slash_count(slash.argument_id)?;
        self.write_json(
            &keys::argument_slash_key(slash.argument_id, slash.id),
            &slash.id,
        )?;
        self.write_json(
            &keys::argument_slasher_slash_key(slash.argument_id, &slash.creator, slash.id),
            &slash.id,
        )?;
        Ok(count)
    }

    /// Bump the per-argument count and return the new value.
    fn increment_slash_count(&self, argument_id: u64) -> Result<u64, SlashError> {
        let count = self.slash_count(argument_id)? + 1;
        self.write_json(&keys::slash_count_key(argument_id), &count)?;
        Ok(count)
    }

    fn resolve_index(&self, prefix: Vec<u8>) -> SlashIter<'_> {
        let iter = self
            .store
            .prefix_iter(&prefix)
            .map(move |item: Result<KvPair, VerdictError>| -> Result<Slash, SlashError> {
                let (_, value) = item?;
                let slash_id: u64 = serde_json::from_slice(&value).map_err(VerdictError::from)?;
                self.slash(slash_id)
            });
        Box::new(iter)
    }
}
