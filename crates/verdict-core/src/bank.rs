// crates/verdict-core/src/bank.rs
//
// Transaction tags and transfer options understood by the bank service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category recorded with every debit or credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    BackingReturned,
    ChallengeReturned,
    UpvoteReturned,
    InterestArgumentCreationSlashed,
    InterestUpvoteReceivedSlashed,
    InterestUpvoteGivenSlashed,
    StakeCreatorSlashed,
    StakeCuratorSlashed,
    CuratorReward,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            TransactionType::BackingReturned => "backing_returned",
            TransactionType::ChallengeReturned => "challenge_returned",
            TransactionType::UpvoteReturned => "upvote_returned",
            TransactionType::InterestArgumentCreationSlashed => {
                "interest_argument_creation_slashed"
            }
            TransactionType::InterestUpvoteReceivedSlashed => "interest_upvote_received_slashed",
            TransactionType::InterestUpvoteGivenSlashed => "interest_upvote_given_slashed",
            TransactionType::StakeCreatorSlashed => "stake_creator_slashed",
            TransactionType::StakeCuratorSlashed => "stake_curator_slashed",
            TransactionType::CuratorReward => "curator_reward",
        };
        f.write_str(tag)
    }
}

/// System-owned accounts used as transfer source or sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleAccount {
    /// Holds the principal of every live stake.
    UserStakesPool,
    /// Collects penalties and funds curator rewards.
    UserRewardPool,
}

impl ModuleAccount {
    pub fn name(&self) -> &'static str {
        match self {
            ModuleAccount::UserStakesPool => "user_stakes_pool",
            ModuleAccount::UserRewardPool => "user_reward_pool",
        }
    }
}

/// Optional routing for a bank transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOptions {
    pub community_id: Option<String>,
    /// Credits are funded by this module account instead of minted.
    pub from_module: Option<ModuleAccount>,
    /// Debits are deposited into this module account instead of burned.
    pub to_module: Option<ModuleAccount>,
}

impl TxOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_community_id(mut self, community_id: impl Into<String>) -> Self {
        self.community_id = Some(community_id.into());
        self
    }

    pub fn from_module_account(mut self, account: ModuleAccount) -> Self {
        self.from_module = Some(account);
        self
    }

    pub fn to_module_account(mut self, account: ModuleAccount) -> Self {
        self.to_module = Some(account);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tx_options_builder() {
        let opts = TxOptions::new()
            .with_community_id("crypto")
            .from_module_account(ModuleAccount::UserStakesPool);
        assert_eq!(opts.community_id.as_deref(), Some("crypto"));
        assert_eq!(opts.from_module, Some(ModuleAccount::UserStakesPool));
        assert_eq!(opts.to_module, None);
    }

    #[test]
    fn test_transaction_type_tags() {
        assert_eq!(TransactionType::CuratorReward.to_string(), "curator_reward");
        assert_eq!(
            TransactionType::StakeCuratorSlashed.to_string(),
            "stake_curator_slashed"
        );
        assert_eq!(ModuleAccount::UserRewardPool.name(), "user_reward_pool");
    }
}
