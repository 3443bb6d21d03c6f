// crates/verdict-cli/src/session.rs
//
// Opens the node database and runs each command as one state transition.
//
// The slashing partition is wrapped in a branch and a gas meter. A command
// that succeeds commits its branch; one that fails discards it, so the
// database never holds a half-applied command.

use chrono::{DateTime, Utc};
use thiserror::Error;

use verdict_core::{
    AccountKeeper, Address, Argument, Bank, ClaimKeeper, Coin, KvStore, Stake, StakeKeeper,
    TransactionType, TxOptions, VerdictError,
};
use verdict_slashing::{SlashError, SlashKeeper};
use verdict_store::{BranchStore, GasConfig, GasMeter, GasMeteredStore, PrefixStore, RocksStore};

use crate::config::{expand_tilde, CliConfig};

/// Namespace of the slashing partition inside the node database.
pub const SLASHING_NAMESPACE: &str = "slashing/";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Slash(#[from] SlashError),

    #[error(transparent)]
    Store(#[from] VerdictError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Keeper as seen by a command: the partition is type-erased so every
/// command shares one signature.
pub type CliKeeper<'k> = SlashKeeper<'k, &'k dyn KvStore>;

/// Collaborators for commands that never move funds or touch stakes.
///
/// Admin edits and slash queries only read and write the slashing
/// partition, so every call here reports that the service is absent.
struct Offline;

fn offline(service: &str) -> VerdictError {
    VerdictError::InvalidState(format!("{} service is not available offline", service))
}

impl Bank for Offline {
    fn add_coin(
        &self,
        _: &Address,
        _: Coin,
        _: u64,
        _: TransactionType,
        _: TxOptions,
    ) -> Result<Coin, VerdictError> {
        Err(offline("bank"))
    }

    fn safe_subtract_coin(
        &self,
        _: &Address,
        _: Coin,
        _: u64,
        _: TransactionType,
        _: TxOptions,
    ) -> Result<(Coin, Coin), VerdictError> {
        Err(offline("bank"))
    }
}

impl StakeKeeper for Offline {
    fn argument(&self, _: u64) -> Result<Option<Argument>, VerdictError> {
        Err(offline("stake"))
    }

    fn argument_stakes(&self, _: u64) -> Result<Vec<Stake>, VerdictError> {
        Err(offline("stake"))
    }

    fn downvote_argument(&self, _: u64) -> Result<(), VerdictError> {
        Err(offline("stake"))
    }

    fn mark_unhelpful_argument(&self, _: u64) -> Result<(), VerdictError> {
        Err(offline("stake"))
    }

    fn remove_from_active_queue(&self, _: u64, _: DateTime<Utc>) -> Result<(), VerdictError> {
        Err(offline("stake"))
    }

    fn set_stake_expired(&self, _: u64) -> Result<(), VerdictError> {
        Err(offline("stake"))
    }

    fn subtract_earned_coin(&self, _: &Address, _: &str, _: u64) -> Result<(), VerdictError> {
        Err(offline("stake"))
    }

    fn total_earned_coins(&self, _: &Address) -> Result<Coin, VerdictError> {
        Err(offline("stake"))
    }
}

impl AccountKeeper for Offline {
    fn increment_slash_count(&self, _: &Address) -> Result<bool, VerdictError> {
        Err(offline("account"))
    }
}

impl ClaimKeeper for Offline {
    fn subtract_backing_stake(&self, _: u64, _: Coin) -> Result<(), VerdictError> {
        Err(offline("claim"))
    }

    fn subtract_challenge_stake(&self, _: u64, _: Coin) -> Result<(), VerdictError> {
        Err(offline("claim"))
    }
}

pub struct Session {
    db: RocksStore,
    gas_limit: u64,
}

impl Session {
    /// Open (or create) the database under `config.data_dir`.
    pub fn open(config: &CliConfig) -> Result<Self, CliError> {
        let data_dir = expand_tilde(&config.data_dir);
        std::fs::create_dir_all(&data_dir)?;
        let db_path = format!("{}/rocksdb", data_dir);
        tracing::debug!("Opening database at {}", db_path);
        let db = RocksStore::open(&db_path)?;
        Ok(Self {
            db,
            gas_limit: config.gas_limit,
        })
    }

    /// Run `op` against the slashing partition as one state transition.
    pub fn transact<T>(
        &self,
        op: impl FnOnce(&CliKeeper<'_>) -> Result<T, SlashError>,
    ) -> Result<T, CliError> {
        let meter = match self.gas_limit {
            0 => GasMeter::infinite(),
            limit => GasMeter::new(limit),
        };
        let branch = BranchStore::new(PrefixStore::new(&self.db, SLASHING_NAMESPACE));

        let result = {
            let metered = GasMeteredStore::new(&branch, &meter, GasConfig::kv_default());
            let store: &dyn KvStore = &metered;
            let keeper = SlashKeeper::new(store, &Offline, &Offline, &Offline, &Offline);
            op(&keeper)
        };

        match result {
            Ok(value) => {
                let writes = branch.pending();
                branch.commit()?;
                tracing::debug!(writes, gas_used = meter.consumed(), "Committed transition");
                Ok(value)
            }
            Err(e) => {
                branch.discard();
                tracing::debug!(gas_used = meter.consumed(), "Discarded transition: {}", e);
                Err(e.into())
            }
        }
    }
}
