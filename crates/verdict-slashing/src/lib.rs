// crates/verdict-slashing/src/lib.rs
//
// verdict-slashing: Flagging of unhelpful arguments and their settlement.
//
// Curators flag arguments they judge unhelpful. Once enough distinct
// curators agree (or a single admin does), every stake on the argument is
// unwound, its stakers are penalized, and the curators share a cut of the
// staking pool. All state lives in one namespaced store partition; balances,
// stakes, claims, and accounts belong to collaborator services reached
// through the `verdict_core` traits.

pub mod admin;
pub mod error;
pub mod keeper;
pub mod keys;
pub mod ledger;
pub mod params;
pub mod punishment;
pub mod rewards;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types for ergonomic access from downstream crates.
pub use error::{ErrorKind, SlashError, SlashFailure, CODESPACE};
pub use keeper::{SlashKeeper, START_SLASH_ID};
pub use ledger::SlashIter;
pub use params::Params;
pub use rewards::{compute_curator_split, CuratorSplit};
pub use types::{PunishmentKind, PunishmentResult, Slash, SlashOutcome, SlashReason, SlashType};
