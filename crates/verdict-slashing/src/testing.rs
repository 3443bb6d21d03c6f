// crates/verdict-slashing/src/testing.rs
//
// Shared fixtures for unit tests.

use chrono::{DateTime, Utc};
use verdict_core::{
    AccountKeeper, Address, Argument, Bank, ClaimKeeper, Coin, Stake, StakeKeeper,
    TransactionType, TxOptions, VerdictError,
};

/// Collaborator set for operations that must never reach a collaborator.
pub(crate) struct Unused;

impl Bank for Unused {
    fn add_coin(
        &self,
        _: &Address,
        _: Coin,
        _: u64,
        _: TransactionType,
        _: TxOptions,
    ) -> Result<Coin, VerdictError> {
        unreachable!()
    }
    fn safe_subtract_coin(
        &self,
        _: &Address,
        _: Coin,
        _: u64,
        _: TransactionType,
        _: TxOptions,
    ) -> Result<(Coin, Coin), VerdictError> {
        unreachable!()
    }
}

impl StakeKeeper for Unused {
    fn argument(&self, _: u64) -> Result<Option<Argument>, VerdictError> {
        unreachable!()
    }
    fn argument_stakes(&self, _: u64) -> Result<Vec<Stake>, VerdictError> {
        unreachable!()
    }
    fn downvote_argument(&self, _: u64) -> Result<(), VerdictError> {
        unreachable!()
    }
    fn mark_unhelpful_argument(&self, _: u64) -> Result<(), VerdictError> {
        unreachable!()
    }
    fn remove_from_active_queue(&self, _: u64, _: DateTime<Utc>) -> Result<(), VerdictError> {
        unreachable!()
    }
    fn set_stake_expired(&self, _: u64) -> Result<(), VerdictError> {
        unreachable!()
    }
    fn subtract_earned_coin(&self, _: &Address, _: &str, _: u64) -> Result<(), VerdictError> {
        unreachable!()
    }
    fn total_earned_coins(&self, _: &Address) -> Result<Coin, VerdictError> {
        unreachable!()
    }
}

impl AccountKeeper for Unused {
    fn increment_slash_count(&self, _: &Address) -> Result<bool, VerdictError> {
        unreachable!()
    }
}

impl ClaimKeeper for Unused {
    fn subtract_backing_stake(&self, _: u64, _: Coin) -> Result<(), VerdictError> {
        unreachable!()
    }
    fn subtract_challenge_stake(&self, _: u64, _: Coin) -> Result<(), VerdictError> {
        unreachable!()
    }
}
