// crates/verdict-slashing/src/punishment.rs
//
// Flag intake and settlement of unhelpful arguments.
//
// `create_slash` validates, records the flag, and when the threshold is met
// marks the argument unhelpful and runs `punish`. Punishment walks every
// stake on the argument:
//
//   1. refund live principal from the stakes pool, then expire the stake
//   2. claw back interest already paid on stakes that expired normally
//   3. debit slash_magnitude x principal into the reward pool
//   4. shrink the parent claim's backing/challenge total
//   5. bump the staker's personal slash count (may jail)
//
// and finally pays curators out of the reward pool.
//
// A failure at any step stops the walk and returns the effects applied so
// far. Nothing is rolled back here: writes already made by this call and by
// collaborators are discarded by the host's transition boundary.

use verdict_core::{
    Address, BlockContext, Coin, KvStore, ModuleAccount, RewardResult, RewardResultType, Stake,
    StakeType, TransactionType, TxOptions,
};

use crate::error::{SlashError, SlashFailure};
use crate::keeper::SlashKeeper;
use crate::types::{PunishmentKind, PunishmentResult, Slash, SlashOutcome, SlashReason, SlashType};

impl<'a, S: KvStore> SlashKeeper<'a, S> {
    /// File an "unhelpful" flag against an argument.
    ///
    /// Validation failures leave no trace. Failures after the slash is
    /// persisted come back in a `SlashFailure` carrying the slash and every
    /// effect applied before the error.
    pub fn create_slash(
        &self,
        ctx: &BlockContext,
        argument_id: u64,
        kind: SlashType,
        reason: SlashReason,
        detailed_reason: &str,
        creator: Address,
    ) -> Result<SlashOutcome, SlashFailure> {
        self.validate(argument_id, detailed_reason, &creator)?;

        let slash = Slash {
            id: self.next_slash_id()?,
            argument_id,
            kind,
            reason,
            detailed_reason: detailed_reason.to_string(),
            creator,
            created_time: ctx.time,
        };
        self.record_slash(&slash)?;

        let mut results = Vec::new();
        if let Err(error) = self.settle_if_triggered(&slash, &mut results) {
            return Err(SlashFailure {
                slash: Some(slash),
                results,
                error,
            });
        }

        tracing::info!("Created new slash: {}", slash);
        Ok(SlashOutcome { slash, results })
    }

    fn settle_if_triggered(
        &self,
        slash: &Slash,
        results: &mut Vec<PunishmentResult>,
    ) -> Result<(), SlashError> {
        self.stakes.downvote_argument(slash.argument_id)?;

        if !self.should_trigger_punishment(slash.argument_id, &slash.creator)? {
            return Ok(());
        }

        self.stakes.mark_unhelpful_argument(slash.argument_id)?;
        tracing::info!(
            argument_id = slash.argument_id,
            slash_id = slash.id,
            "Argument marked unhelpful"
        );
        self.punish(slash.argument_id, results)
    }

    /// Unwind and penalize every stake on `argument_id`, then reward its
    /// curators. Effects are appended to `results` as they are applied.
    pub fn punish(
        &self,
        argument_id: u64,
        results: &mut Vec<PunishmentResult>,
    ) -> Result<(), SlashError> {
        let params = self.params()?;
        let argument = self
            .stakes
            .argument(argument_id)?
            .ok_or(SlashError::ArgumentNotFound(argument_id))?;

        let mut staking_pool = Coin::zero();
        let mut community_id = argument.community_id.clone();

        for stake in self.stakes.argument_stakes(argument_id)? {
            tracing::debug!(
                stake_id = stake.id,
                kind = ?stake.kind,
                amount = stake.amount.amount,
                expired = stake.expired,
                "Punishing stake"
            );
            community_id = stake.community_id.clone();
            staking_pool = staking_pool + stake.amount;

            if !stake.expired {
                self.refund_stake(&stake)?;
            } else if let Some(result) = &stake.result {
                self.claw_back_interest(&stake, result, results)?;
            }

            self.penalize_stake(&stake, params.slash_magnitude, results)?;

            match stake.kind {
                StakeType::Backing => self
                    .claims
                    .subtract_backing_stake(argument.claim_id, stake.amount)?,
                StakeType::Challenge => self
                    .claims
                    .subtract_challenge_stake(argument.claim_id, stake.amount)?,
                StakeType::Upvote => {}
            }

            if self.accounts.increment_slash_count(&stake.creator)? {
                tracing::warn!(address = %stake.creator, "Account jailed after slash");
                results.push(PunishmentResult::jailed(stake.creator));
            }
        }

        if !staking_pool.is_positive() {
            return Err(SlashError::EmptyStakingPool(argument_id));
        }

        self.reward_curators(staking_pool, argument_id, &community_id, results)
    }

    /// Return live principal to its owner and take the stake off the expiry
    /// schedule so ordinary lifecycle processing never pays it again.
    fn refund_stake(&self, stake: &Stake) -> Result<(), SlashError> {
        let refund_type = match stake.kind {
            StakeType::Backing => TransactionType::BackingReturned,
            StakeType::Challenge => TransactionType::ChallengeReturned,
            StakeType::Upvote => TransactionType::UpvoteReturned,
        };
        self.bank.add_coin(
            &stake.creator,
            stake.amount,
            stake.argument_id,
            refund_type,
            TxOptions::new()
                .with_community_id(stake.community_id.as_str())
                .from_module_account(ModuleAccount::UserStakesPool),
        )?;
        self.stakes
            .remove_from_active_queue(stake.id, stake.end_time)?;
        self.stakes.set_stake_expired(stake.id)?;
        Ok(())
    }

    /// Reverse interest paid when an already-expired stake settled.
    fn claw_back_interest(
        &self,
        stake: &Stake,
        result: &RewardResult,
        results: &mut Vec<PunishmentResult>,
    ) -> Result<(), SlashError> {
        match result.kind {
            RewardResultType::ArgumentCreation => {
                self.take_back_interest(
                    stake,
                    &result.argument_creator,
                    result.argument_creator_reward,
                    TransactionType::InterestArgumentCreationSlashed,
                    results,
                )?;
            }
            RewardResultType::UpvoteSplit => {
                self.take_back_interest(
                    stake,
                    &result.argument_creator,
                    result.argument_creator_reward,
                    TransactionType::InterestUpvoteReceivedSlashed,
                    results,
                )?;
                self.take_back_interest(
                    stake,
                    &result.stake_creator,
                    result.stake_creator_reward,
                    TransactionType::InterestUpvoteGivenSlashed,
                    results,
                )?;
            }
        }
        Ok(())
    }

    fn take_back_interest(
        &self,
        stake: &Stake,
        address: &Address,
        reward: Coin,
        tx_type: TransactionType,
        results: &mut Vec<PunishmentResult>,
    ) -> Result<(), SlashError> {
        self.stakes
            .subtract_earned_coin(address, &stake.community_id, reward.amount)?;
        let (_, subtracted) = self.bank.safe_subtract_coin(
            address,
            reward,
            stake.id,
            tx_type,
            TxOptions::new()
                .with_community_id(stake.community_id.as_str())
                .to_module_account(ModuleAccount::UserRewardPool),
        )?;
        results.push(PunishmentResult::new(
            PunishmentKind::InterestSlashed,
            *address,
            subtracted,
        ));
        Ok(())
    }

    fn penalize_stake(
        &self,
        stake: &Stake,
        slash_magnitude: u64,
        results: &mut Vec<PunishmentResult>,
    ) -> Result<(), SlashError> {
        let penalty = stake.amount.mul_int(slash_magnitude);
        let tx_type = match stake.kind {
            StakeType::Upvote => TransactionType::StakeCuratorSlashed,
            StakeType::Backing | StakeType::Challenge => TransactionType::StakeCreatorSlashed,
        };
        let debit = self.bank.safe_subtract_coin(
            &stake.creator,
            penalty,
            stake.id,
            tx_type,
            TxOptions::new()
                .with_community_id(stake.community_id.as_str())
                .to_module_account(ModuleAccount::UserRewardPool),
        );
        // A rejected debit still reports this stake, with nothing subtracted.
        let subtracted = match &debit {
            Ok((_, subtracted)) => *subtracted,
            Err(_) => Coin::zero(),
        };
        results.push(PunishmentResult::new(
            PunishmentKind::StakeSlashed,
            stake.creator,
            subtracted,
        ));
        debit?;

        if subtracted < penalty {
            tracing::warn!(
                stake_id = stake.id,
                requested = penalty.amount,
                subtracted = subtracted.amount,
                "Penalty clamped to available balance"
            );
        }
        Ok(())
    }
}
