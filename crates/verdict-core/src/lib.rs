// crates/verdict-core/src/lib.rs
//
// verdict-core: Core types, errors, and service traits for the Verdict
// misbehavior-adjudication engine.
//
// This is the leaf crate every other crate in the workspace depends on. It
// defines addresses, coin amounts, the stake and argument records owned by
// collaborator services, the protocol-wide error type, and the store and
// collaborator interfaces the slashing engine is wired against.

pub mod bank;
pub mod coin;
pub mod error;
pub mod identity;
pub mod stake;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use verdict_core::Coin;`

pub use bank::{ModuleAccount, TransactionType, TxOptions};
pub use coin::{Coin, Ratio, PARTS_PER_UNIT, STAKE_DENOM};
pub use error::VerdictError;
pub use identity::Address;
pub use stake::{Argument, BlockContext, RewardResult, RewardResultType, Stake, StakeType};
pub use traits::{AccountKeeper, Bank, ClaimKeeper, KvIter, KvPair, KvStore, StakeKeeper};
