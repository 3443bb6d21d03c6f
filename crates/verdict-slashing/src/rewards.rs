// crates/verdict-slashing/src/rewards.rs
//
// Curator reward distribution.
//
// Once an argument is settled, `curator_share` of the staking pool is split
// evenly between everyone who flagged it:
//
//   per_curator = floor(staking_pool * curator_share / curators)
//
// The pool is the summed principal of every stake on the argument, not the
// penalties actually collected. Whatever the floor division leaves over stays
// in the reward pool.

use verdict_core::{Coin, KvStore, ModuleAccount, Ratio, TransactionType, TxOptions};

use crate::error::SlashError;
use crate::keeper::SlashKeeper;
use crate::types::{PunishmentKind, PunishmentResult};

/// How a curator payout splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuratorSplit {
    /// `floor(staking_pool * curator_share)`.
    pub total: u64,
    pub per_curator: u64,
    pub distributed: u64,
    /// Left undistributed by the floor division.
    pub dust: u64,
}

/// Compute the per-curator payout for `curators` recipients.
pub fn compute_curator_split(
    staking_pool: Coin,
    curator_share: Ratio,
    curators: usize,
) -> CuratorSplit {
    let total = curator_share.mul_floor(staking_pool.amount);
    let per_curator = curator_share.mul_div_floor(staking_pool.amount, curators as u64);
    let distributed = per_curator.saturating_mul(curators as u64);
    CuratorSplit {
        total,
        per_curator,
        distributed,
        dust: total.saturating_sub(distributed),
    }
}

impl<'a, S: KvStore> SlashKeeper<'a, S> {
    /// Pay every curator of `argument_id` their share from the reward pool.
    ///
    /// Effects are appended to `results` as they happen. A failed credit
    /// stops the loop; earlier credits stay applied.
    pub fn reward_curators(
        &self,
        staking_pool: Coin,
        argument_id: u64,
        community_id: &str,
        results: &mut Vec<PunishmentResult>,
    ) -> Result<(), SlashError> {
        let params = self.params()?;
        let slashes = self.argument_slashes(argument_id)?;
        if slashes.is_empty() {
            return Ok(());
        }

        let split = compute_curator_split(staking_pool, params.curator_share, slashes.len());
        let curator_coin = Coin::new(split.per_curator);

        for slash in &slashes {
            self.bank.add_coin(
                &slash.creator,
                curator_coin,
                slash.id,
                TransactionType::CuratorReward,
                TxOptions::new()
                    .with_community_id(community_id)
                    .from_module_account(ModuleAccount::UserRewardPool),
            )?;
            results.push(PunishmentResult::new(
                PunishmentKind::CuratorRewarded,
                slash.creator,
                curator_coin,
            ));
        }

        tracing::info!(
            argument_id,
            curators = slashes.len(),
            per_curator = split.per_curator,
            dust = split.dust,
            "Rewarded curators"
        );
        Ok(())
    }
}
