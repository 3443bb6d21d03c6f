// crates/verdict-core/src/traits.rs
//
// Interfaces the slashing engine consumes.
//
// Execution is single-writer: the host applies one state transition at a
// time, so implementations use `&self` with interior mutability and are not
// required to be `Sync`.

use chrono::{DateTime, Utc};

use crate::bank::{TransactionType, TxOptions};
use crate::coin::Coin;
use crate::error::VerdictError;
use crate::identity::Address;
use crate::stake::{Argument, Stake};

/// A raw key/value pair yielded by prefix iteration.
pub type KvPair = (Vec<u8>, Vec<u8>);

/// Lazy, forward-only iterator over a key prefix. Dropping it closes it.
pub type KvIter<'a> = Box<dyn Iterator<Item = Result<KvPair, VerdictError>> + 'a>;

/// Ordered key/value store scoped to the current state transition.
///
/// Implemented by verdict-store (memory, RocksDB, prefix, gas and branch
/// wrappers).
pub trait KvStore {
    /// Read a value. `None` when the key is absent.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, VerdictError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), VerdictError>;

    /// Remove a key. Absent keys are ignored.
    fn delete(&self, key: &[u8]) -> Result<(), VerdictError>;

    /// Iterate every entry whose key starts with `prefix`, in ascending key
    /// order. Entries are fetched one at a time as the iterator advances.
    fn prefix_iter<'a>(&'a self, prefix: &[u8]) -> KvIter<'a>;

    fn has(&self, key: &[u8]) -> Result<bool, VerdictError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<T: KvStore + ?Sized> KvStore for &T {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, VerdictError> {
        (**self).get(key)
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), VerdictError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &[u8]) -> Result<(), VerdictError> {
        (**self).delete(key)
    }

    fn prefix_iter<'a>(&'a self, prefix: &[u8]) -> KvIter<'a> {
        (**self).prefix_iter(prefix)
    }
}

/// Balance ledger.
pub trait Bank {
    /// Credit `coin` to `address`. Returns the new balance.
    fn add_coin(
        &self,
        address: &Address,
        coin: Coin,
        reference_id: u64,
        tx_type: TransactionType,
        opts: TxOptions,
    ) -> Result<Coin, VerdictError>;

    /// Debit up to `coin` from `address` without driving the balance
    /// negative. Returns `(new_balance, amount_subtracted)`.
    fn safe_subtract_coin(
        &self,
        address: &Address,
        coin: Coin,
        reference_id: u64,
        tx_type: TransactionType,
        opts: TxOptions,
    ) -> Result<(Coin, Coin), VerdictError>;
}

/// Stake lifecycle service: arguments, stakes, and earned-coin bookkeeping.
pub trait StakeKeeper {
    fn argument(&self, argument_id: u64) -> Result<Option<Argument>, VerdictError>;

    /// Every stake attached to an argument, all types.
    fn argument_stakes(&self, argument_id: u64) -> Result<Vec<Stake>, VerdictError>;

    /// Record that an argument received an "unhelpful" flag.
    fn downvote_argument(&self, argument_id: u64) -> Result<(), VerdictError>;

    fn mark_unhelpful_argument(&self, argument_id: u64) -> Result<(), VerdictError>;

    /// Drop a stake from the expiry schedule.
    fn remove_from_active_queue(
        &self,
        stake_id: u64,
        end_time: DateTime<Utc>,
    ) -> Result<(), VerdictError>;

    fn set_stake_expired(&self, stake_id: u64) -> Result<(), VerdictError>;

    fn subtract_earned_coin(
        &self,
        address: &Address,
        community_id: &str,
        amount: u64,
    ) -> Result<(), VerdictError>;

    /// Sum of coins a user has earned across all communities.
    fn total_earned_coins(&self, address: &Address) -> Result<Coin, VerdictError>;
}

/// Account service.
pub trait AccountKeeper {
    /// Bump the user's personal slash count. Returns `true` when this
    /// increment jailed the account.
    fn increment_slash_count(&self, address: &Address) -> Result<bool, VerdictError>;
}

/// Claim aggregate totals.
pub trait ClaimKeeper {
    fn subtract_backing_stake(&self, claim_id: u64, amount: Coin) -> Result<(), VerdictError>;

    fn subtract_challenge_stake(&self, claim_id: u64, amount: Coin) -> Result<(), VerdictError>;
}
