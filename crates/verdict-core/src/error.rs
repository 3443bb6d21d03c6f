// crates/verdict-core/src/error.rs

use thiserror::Error;

/// Protocol-wide error type returned by stores and collaborator services.
///
/// The slashing engine never inspects or rewrites these; they are carried
/// back to the host verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerdictError {
    /// Storage layer error (RocksDB, in-memory backend).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The gas meter of the current state transition is exhausted.
    #[error("Out of gas in {descriptor}: limit {limit}, consumed {consumed}")]
    OutOfGas {
        descriptor: &'static str,
        limit: u64,
        consumed: u64,
    },

    /// A balance or pool cannot cover a requested transfer.
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid state transition.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl VerdictError {
    /// Stable numeric code (core codespace, 100-199).
    pub fn code(&self) -> u32 {
        match self {
            VerdictError::Storage(_) => 101,
            VerdictError::Serialization(_) => 102,
            VerdictError::OutOfGas { .. } => 103,
            VerdictError::InsufficientFunds(_) => 104,
            VerdictError::NotFound(_) => 105,
            VerdictError::InvalidState(_) => 106,
        }
    }

    /// Whether this error came from metering exhaustion.
    pub fn is_out_of_gas(&self) -> bool {
        matches!(self, VerdictError::OutOfGas { .. })
    }
}

impl From<serde_json::Error> for VerdictError {
    fn from(e: serde_json::Error) -> Self {
        VerdictError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_gas_display() {
        let err = VerdictError::OutOfGas {
            descriptor: "ReadFlat",
            limit: 10,
            consumed: 12,
        };
        assert!(err.is_out_of_gas());
        assert_eq!(err.code(), 103);
        assert_eq!(
            err.to_string(),
            "Out of gas in ReadFlat: limit 10, consumed 12"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let parse: Result<u64, _> = serde_json::from_str("not-json");
        let err: VerdictError = parse.unwrap_err().into();
        assert!(matches!(err, VerdictError::Serialization(_)));
        assert!(!err.is_out_of_gas());
    }
}
