// crates/verdict-slashing/src/error.rs
//
// Slashing errors. Codes are reserved in the 1300-1399 range and never
// reused; the calling layer surfaces them unchanged.

use thiserror::Error;

use verdict_core::{Address, VerdictError};

use crate::types::{PunishmentResult, Slash};

/// Codespace tag reported next to every code.
pub const CODESPACE: &str = "slashing";

/// Broad classes a caller can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before any state changed.
    Validation,
    NotFound,
    /// The target is already in a terminal state.
    StateConflict,
    /// Failure reported by a store or collaborator service.
    Collaborator,
    /// Nothing left to distribute, or the transition ran out of gas.
    ResourceExhaustion,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlashError {
    #[error("Argument {0} not found")]
    ArgumentNotFound(u64),

    #[error("Argument {0} is already marked unhelpful")]
    AlreadyUnhelpful(u64),

    #[error("Argument {0} has already reached the maximum slash count")]
    MaxSlashCountReached(u64),

    #[error("Invalid slash reason: {0}")]
    InvalidReason(String),

    #[error("{creator} has already slashed argument {argument_id}")]
    AlreadySlashed { argument_id: u64, creator: Address },

    #[error("{0} has not earned enough stake to slash")]
    NotEnoughEarnedStake(Address),

    #[error("{0} is not authorised to manage slash admins")]
    Unauthorized(Address),

    #[error("Slash {0} not found")]
    SlashNotFound(u64),

    #[error("Staking pool for argument {0} cannot be empty")]
    EmptyStakingPool(u64),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Store or collaborator failure, carried verbatim.
    #[error(transparent)]
    Host(#[from] VerdictError),
}

impl SlashError {
    /// Stable numeric code. Host errors keep their own core code.
    pub fn code(&self) -> u32 {
        match self {
            SlashError::ArgumentNotFound(_) => 1301,
            SlashError::AlreadyUnhelpful(_) => 1302,
            SlashError::MaxSlashCountReached(_) => 1303,
            SlashError::InvalidReason(_) => 1304,
            SlashError::AlreadySlashed { .. } => 1305,
            SlashError::NotEnoughEarnedStake(_) => 1306,
            SlashError::Unauthorized(_) => 1307,
            SlashError::SlashNotFound(_) => 1308,
            SlashError::EmptyStakingPool(_) => 1309,
            SlashError::InvalidParams(_) => 1310,
            SlashError::Host(e) => e.code(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SlashError::InvalidReason(_)
            | SlashError::AlreadySlashed { .. }
            | SlashError::MaxSlashCountReached(_)
            | SlashError::NotEnoughEarnedStake(_)
            | SlashError::Unauthorized(_)
            | SlashError::InvalidParams(_) => ErrorKind::Validation,
            SlashError::ArgumentNotFound(_) | SlashError::SlashNotFound(_) => ErrorKind::NotFound,
            SlashError::AlreadyUnhelpful(_) => ErrorKind::StateConflict,
            SlashError::EmptyStakingPool(_) => ErrorKind::ResourceExhaustion,
            SlashError::Host(e) if e.is_out_of_gas() => ErrorKind::ResourceExhaustion,
            SlashError::Host(_) => ErrorKind::Collaborator,
        }
    }
}

/// A `create_slash` call that stopped with an error.
///
/// When the failure happened after the slash was persisted, `slash` holds
/// the record and `results` every effect applied before the failure. None of
/// it is rolled back here; the host discards the whole transition.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct SlashFailure {
    pub slash: Option<Slash>,
    pub results: Vec<PunishmentResult>,
    #[source]
    pub error: SlashError,
}

impl SlashFailure {
    pub fn code(&self) -> u32 {
        self.error.code()
    }
}

impl From<SlashError> for SlashFailure {
    fn from(error: SlashError) -> Self {
        Self {
            slash: None,
            results: Vec::new(),
            error,
        }
    }
}

impl From<VerdictError> for SlashFailure {
    fn from(error: VerdictError) -> Self {
        SlashError::from(error).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(SlashError::ArgumentNotFound(1).code(), 1301);
        assert_eq!(SlashError::Unauthorized(Address::new([0; 32])).code(), 1307);
        assert_eq!(
            SlashError::Host(VerdictError::InsufficientFunds("x".into())).code(),
            104
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(SlashError::AlreadyUnhelpful(1).kind(), ErrorKind::StateConflict);
        assert_eq!(SlashError::SlashNotFound(1).kind(), ErrorKind::NotFound);
        assert_eq!(
            SlashError::InvalidReason("too long".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            SlashError::EmptyStakingPool(1).kind(),
            ErrorKind::ResourceExhaustion
        );
        let gas = VerdictError::OutOfGas {
            descriptor: "WriteFlat",
            limit: 1,
            consumed: 2,
        };
        assert_eq!(SlashError::from(gas).kind(), ErrorKind::ResourceExhaustion);
        assert_eq!(
            SlashError::from(VerdictError::Storage("disk".into())).kind(),
            ErrorKind::Collaborator
        );
    }

    #[test]
    fn test_host_error_message_is_verbatim() {
        let inner = VerdictError::InsufficientFunds("pool drained".into());
        let err = SlashError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn test_failure_from_validation_error() {
        let failure = SlashFailure::from(SlashError::ArgumentNotFound(7));
        assert!(failure.slash.is_none());
        assert!(failure.results.is_empty());
        assert_eq!(failure.code(), 1301);
        assert_eq!(failure.to_string(), "Argument 7 not found");
    }
}
