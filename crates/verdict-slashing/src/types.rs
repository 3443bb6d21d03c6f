// crates/verdict-slashing/src/types.rs
//
// Slash records and punishment effects.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use verdict_core::{Address, Coin};

/// What kind of flag was filed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlashType {
    Unhelpful,
}

/// Why the curator flagged the argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlashReason {
    LogicOrEvidence,
    IssueFocus,
    PersonalAttack,
    Plagiarism,
    Other,
}

/// One user's "unhelpful" flag against one argument.
///
/// Written once by `create_slash` and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slash {
    pub id: u64,
    pub argument_id: u64,
    #[serde(rename = "type")]
    pub kind: SlashType,
    pub reason: SlashReason,
    pub detailed_reason: String,
    pub creator: Address,
    pub created_time: DateTime<Utc>,
}

impl fmt::Display for Slash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Slash <{}> argument={} type={:?} reason={:?} creator={} at {}",
            self.id,
            self.argument_id,
            self.kind,
            self.reason,
            self.creator,
            self.created_time.to_rfc3339()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunishmentKind {
    StakeSlashed,
    InterestSlashed,
    CuratorRewarded,
    Jailed,
}

/// One effect applied while settling a flagged argument.
///
/// Reported to the caller only; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunishmentResult {
    #[serde(rename = "type")]
    pub kind: PunishmentKind,
    pub address: Address,
    /// Amount moved. Zero for `Jailed`.
    pub coin: Coin,
}

impl PunishmentResult {
    pub fn new(kind: PunishmentKind, address: Address, coin: Coin) -> Self {
        Self {
            kind,
            address,
            coin,
        }
    }

    pub fn jailed(address: Address) -> Self {
        Self::new(PunishmentKind::Jailed, address, Coin::zero())
    }
}

/// Result of a successful `create_slash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashOutcome {
    pub slash: Slash,
    /// Empty unless this flag triggered punishment.
    pub results: Vec<PunishmentResult>,
}

impl SlashOutcome {
    pub fn punished(&self) -> bool {
        !self.results.is_empty()
    }
}
