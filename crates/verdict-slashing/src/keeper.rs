// crates/verdict-slashing/src/keeper.rs
//
// The slashing service object.
//
// A `SlashKeeper` is built once at startup. It owns a handle to its own
// namespaced store partition and holds non-owning references to the
// collaborator services it calls into. All persistent counters live in the
// store; the keeper itself carries no mutable state.

use serde::de::DeserializeOwned;
use serde::Serialize;

use verdict_core::{AccountKeeper, Bank, ClaimKeeper, KvStore, StakeKeeper};

use crate::error::SlashError;
use crate::keys;
use crate::params::Params;

/// First ID handed out on a fresh partition.
pub const START_SLASH_ID: u64 = 1;

pub struct SlashKeeper<'a, S> {
    pub(crate) store: S,
    pub(crate) bank: &'a dyn Bank,
    pub(crate) stakes: &'a dyn StakeKeeper,
    pub(crate) accounts: &'a dyn AccountKeeper,
    pub(crate) claims: &'a dyn ClaimKeeper,
}

impl<'a, S: KvStore> SlashKeeper<'a, S> {
    pub fn new(
        store: S,
        bank: &'a dyn Bank,
        stakes: &'a dyn StakeKeeper,
        accounts: &'a dyn AccountKeeper,
        claims: &'a dyn ClaimKeeper,
    ) -> Self {
        Self {
            store,
            bank,
            stakes,
            accounts,
            claims,
        }
    }

    /// Seed a fresh partition with `params` and the starting slash ID.
    ///
    /// Keys already present are left alone, so this is safe on every start.
    pub fn initialize(&self, params: &Params) -> Result<(), SlashError> {
        if !self.store.has(keys::PARAMS_KEY)? {
            params.validate()?;
            self.write_json(keys::PARAMS_KEY, params)?;
            tracing::info!(
                min_slash_count = params.min_slash_count,
                admins = params.slash_admins.len(),
                "Initialized slashing params"
            );
        }
        if !self.store.has(keys::SLASH_ID_KEY)? {
            self.write_json(keys::SLASH_ID_KEY, &START_SLASH_ID)?;
        }
        Ok(())
    }

    /// Current params, or the defaults when none were ever written.
    pub fn params(&self) -> Result<Params, SlashError> {
        Ok(self.read_json(keys::PARAMS_KEY)?.unwrap_or_default())
    }

    /// Governance update path. Rejects invalid parameter sets.
    pub fn set_params(&self, params: &Params) -> Result<(), SlashError> {
        params.validate()?;
        self.write_json(keys::PARAMS_KEY, params)?;
        tracing::info!("Updated slashing params");
        Ok(())
    }

    /// The store partition this keeper writes to.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn read_json<T: DeserializeOwned>(
        &self,
        key: &[u8],
    ) -> Result<Option<T>, SlashError> {
        match self.store.get(key)? {
            Some(bytes) => {
                let value =
                    serde_json::from_slice(&bytes).map_err(verdict_core::VerdictError::from)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    pub(crate) fn write_json<T: Serialize + ?Sized>(
        &self,
        key: &[u8],
        value: &T,
    ) -> Result<(), SlashError> {
        let bytes = serde_json::to_vec(value).map_err(verdict_core::VerdictError::from)?;
        self.store.set(key, &bytes)?;
        Ok(())
    }
}
