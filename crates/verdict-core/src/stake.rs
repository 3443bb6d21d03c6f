// crates/verdict-core/src/stake.rs
//
// Content and stake records owned by collaborator services.
//
// The slashing engine reads these through the `StakeKeeper` trait and never
// persists them itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coin::Coin;
use crate::identity::Address;

/// Block context supplied by the host for the current state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContext {
    pub height: u64,
    pub time: DateTime<Utc>,
}

impl BlockContext {
    pub fn new(height: u64, time: DateTime<Utc>) -> Self {
        Self { height, time }
    }
}

/// A staked, flaggable unit of user content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub id: u64,
    /// Claim this argument backs or challenges.
    pub claim_id: u64,
    pub creator: Address,
    pub community_id: String,
    #[serde(default)]
    pub is_unhelpful: bool,
}

/// How funds were committed to an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StakeType {
    Backing,
    Challenge,
    Upvote,
}

/// Which reward split was paid out when a stake expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardResultType {
    /// Interest paid to the argument creator for writing the argument.
    ArgumentCreation,
    /// Interest split between the argument creator and an upvoter.
    UpvoteSplit,
}

/// Reward outcome recorded on a stake when it expired normally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardResult {
    #[serde(rename = "type")]
    pub kind: RewardResultType,
    pub argument_creator: Address,
    pub argument_creator_reward: Coin,
    pub stake_creator: Address,
    pub stake_creator_reward: Coin,
}

/// Funds committed to an argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stake {
    pub id: u64,
    pub argument_id: u64,
    #[serde(rename = "type")]
    pub kind: StakeType,
    pub amount: Coin,
    pub creator: Address,
    pub community_id: String,
    pub created_time: DateTime<Utc>,
    /// When the stake leaves the active queue.
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub expired: bool,
    #[serde(default)]
    pub result: Option<RewardResult>,
}
