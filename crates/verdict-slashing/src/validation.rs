// crates/verdict-slashing/src/validation.rs
//
// Gatekeeping for new flags and the punishment trigger.
//
// Checks run in a fixed order and stop at the first failure. Nothing is
// written before they all pass.

use verdict_core::{Address, KvStore};

use crate::error::SlashError;
use crate::keeper::SlashKeeper;
use crate::params::Params;

impl<'a, S: KvStore> SlashKeeper<'a, S> {
    /// Decide whether `creator` may flag `argument_id` with `detailed_reason`.
    pub fn validate(
        &self,
        argument_id: u64,
        detailed_reason: &str,
        creator: &Address,
    ) -> Result<(), SlashError> {
        let params = self.params()?;

        let argument = self
            .stakes
            .argument(argument_id)?
            .ok_or(SlashError::ArgumentNotFound(argument_id))?;

        if argument.is_unhelpful {
            return Err(SlashError::AlreadyUnhelpful(argument_id));
        }

        if self.slash_count(argument_id)? >= params.min_slash_count {
            return Err(SlashError::MaxSlashCountReached(argument_id));
        }

        if detailed_reason.len() > params.max_detailed_reason_length {
            return Err(SlashError::InvalidReason(format!(
                "Detailed reason must be under {} chars.",
                params.max_detailed_reason_length
            )));
        }

        if self.has_previously_slashed(argument_id, creator)? {
            return Err(SlashError::AlreadySlashed {
                argument_id,
                creator: *creator,
            });
        }

        if !params.is_admin(creator) && !self.has_enough_earned_stake(creator, &params)? {
            return Err(SlashError::NotEnoughEarnedStake(*creator));
        }

        Ok(())
    }

    /// Whether the flag just recorded by `creator` settles the argument.
    ///
    /// Admins bypass the count threshold entirely.
    pub fn should_trigger_punishment(
        &self,
        argument_id: u64,
        creator: &Address,
    ) -> Result<bool, SlashError> {
        let params = self.params()?;
        if params.is_admin(creator) {
            return Ok(true);
        }
        Ok(self.slash_count(argument_id)? >= params.min_slash_count)
    }

    pub fn is_admin(&self, address: &Address) -> Result<bool, SlashError> {
        Ok(self.params()?.is_admin(address))
    }

    fn has_previously_slashed(
        &self,
        argument_id: u64,
        creator: &Address,
    ) -> Result<bool, SlashError> {
        match self.iter_argument_slasher_slashes(argument_id, creator).next() {
            Some(found) => found.map(|_| true),
            None => Ok(false),
        }
    }

    fn has_enough_earned_stake(
        &self,
        address: &Address,
        params: &Params,
    ) -> Result<bool, SlashError> {
        let earned = self.stakes.total_earned_coins(address)?;
        Ok(earned >= params.slash_min_stake)
    }
}
