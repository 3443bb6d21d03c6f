// crates/verdict-slashing/src/params.rs
//
// Governance parameters for slashing.
//
// Params live in the keeper's store partition. They are seeded at genesis,
// changed by governance through `SlashKeeper::set_params`, and the admin
// list is edited through the admin registry. Every field has a serde
// default so a partial `[params]` table in a config file is valid.

use serde::{Deserialize, Serialize};

use verdict_core::{Address, Coin, Ratio};

use crate::error::SlashError;

/// Flags needed before an argument is marked unhelpful.
pub const DEFAULT_MIN_SLASH_COUNT: u64 = 5;

/// Longest accepted free-text reason, in bytes.
pub const DEFAULT_MAX_DETAILED_REASON_LENGTH: usize = 140;

/// Earned stake a non-admin needs before they may flag.
pub const DEFAULT_SLASH_MIN_STAKE: u64 = 50;

/// Penalty multiple applied to each stake's principal.
pub const DEFAULT_SLASH_MAGNITUDE: u64 = 3;

/// Share of the staking pool paid out to curators, in percent.
pub const DEFAULT_CURATOR_SHARE_PERCENT: u64 = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    #[serde(default = "default_min_slash_count")]
    pub min_slash_count: u64,

    #[serde(default = "default_max_detailed_reason_length")]
    pub max_detailed_reason_length: usize,

    #[serde(default = "default_slash_min_stake")]
    pub slash_min_stake: Coin,

    #[serde(default = "default_slash_magnitude")]
    pub slash_magnitude: u64,

    #[serde(default = "default_curator_share")]
    pub curator_share: Ratio,

    /// Addresses allowed to bypass the flag threshold, in insertion order.
    #[serde(default)]
    pub slash_admins: Vec<Address>,
}

fn default_min_slash_count() -> u64 {
    DEFAULT_MIN_SLASH_COUNT
}

fn default_max_detailed_reason_length() -> usize {
    DEFAULT_MAX_DETAILED_REASON_LENGTH
}

fn default_slash_min_stake() -> Coin {
    Coin::new(DEFAULT_SLASH_MIN_STAKE)
}

fn default_slash_magnitude() -> u64 {
    DEFAULT_SLASH_MAGNITUDE
}

fn default_curator_share() -> Ratio {
    Ratio::from_percent(DEFAULT_CURATOR_SHARE_PERCENT)
}

impl Default for Params {
    fn default() -> Self {
        Self {
            min_slash_count: default_min_slash_count(),
            max_detailed_reason_length: default_max_detailed_reason_length(),
            slash_min_stake: default_slash_min_stake(),
            slash_magnitude: default_slash_magnitude(),
            curator_share: default_curator_share(),
            slash_admins: Vec::new(),
        }
    }
}

impl Params {
    pub fn is_admin(&self, address: &Address) -> bool {
        self.slash_admins.iter().any(|admin| admin == address)
    }

    /// Reject parameter sets the engine cannot run with.
    pub fn validate(&self) -> Result<(), SlashError> {
        if self.min_slash_count == 0 {
            return Err(SlashError::InvalidParams(
                "min_slash_count must be at least 1".to_string(),
            ));
        }
        if self.slash_magnitude == 0 {
            return Err(SlashError::InvalidParams(
                "slash_magnitude must be at least 1".to_string(),
            ));
        }
        if !self.curator_share.is_fraction() {
            return Err(SlashError::InvalidParams(format!(
                "curator_share must be within [0, 1], got {}",
                self.curator_share
            )));
        }
        for (i, admin) in self.slash_admins.iter().enumerate() {
            if self.slash_admins[..i].contains(admin) {
                return Err(SlashError::InvalidParams(format!(
                    "duplicate slash admin {}",
                    admin
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = Params::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.min_slash_count, 5);
        assert_eq!(params.curator_share, Ratio::from_percent(25));
        assert!(params.slash_admins.is_empty());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: Params = serde_json::from_str(r#"{"min_slash_count": 3}"#).unwrap();
        assert_eq!(params.min_slash_count, 3);
        assert_eq!(params.slash_magnitude, DEFAULT_SLASH_MAGNITUDE);
        assert_eq!(params.slash_min_stake, Coin::new(DEFAULT_SLASH_MIN_STAKE));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut params = Params {
            min_slash_count: 0,
            ..Params::default()
        };
        assert!(params.validate().is_err());

        params.min_slash_count = 1;
        params.curator_share = "1.5".parse().unwrap();
        assert!(params.validate().is_err());

        params.curator_share = Ratio::one();
        params.slash_magnitude = 0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_admins() {
        let admin = Address::new([9; 32]);
        let params = Params {
            slash_admins: vec![admin, Address::new([1; 32]), admin],
            ..Params::default()
        };
        assert!(matches!(
            params.validate(),
            Err(SlashError::InvalidParams(_))
        ));
        assert!(params.is_admin(&admin));
    }
}
