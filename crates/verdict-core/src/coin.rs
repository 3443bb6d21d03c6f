// crates/verdict-core/src/coin.rs
//
// Stake token amounts and fixed-point fractions.
//
// All balances are integer amounts of the single stake denomination. Share
// parameters are fixed-point ratios with nine decimal places so that reward
// arithmetic never touches floating point.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::VerdictError;

/// Denomination of every coin handled by the engine.
pub const STAKE_DENOM: &str = "vdt";

/// Fixed-point scale of a [`Ratio`]: 1.0 == 10^9 parts.
pub const PARTS_PER_UNIT: u64 = 1_000_000_000;

/// An amount of the stake denomination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coin {
    pub amount: u64,
}

impl Coin {
    pub fn new(amount: u64) -> Self {
        Self { amount }
    }

    pub fn zero() -> Self {
        Self { amount: 0 }
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Multiply by an integer factor, saturating at `u64::MAX`.
    pub fn mul_int(self, factor: u64) -> Self {
        Self {
            amount: self.amount.saturating_mul(factor),
        }
    }
}

impl Add for Coin {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            amount: self.amount.saturating_add(rhs.amount),
        }
    }
}

impl Sub for Coin {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            amount: self.amount.saturating_sub(rhs.amount),
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, STAKE_DENOM)
    }
}

/// A fraction with nine decimal places of precision.
///
/// Serialized as a decimal string (`"0.25"`) so config files stay exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ratio {
    parts: u64,
}

impl Ratio {
    pub const fn from_parts(parts: u64) -> Self {
        Self { parts }
    }

    pub const fn from_percent(percent: u64) -> Self {
        Self {
            parts: percent * (PARTS_PER_UNIT / 100),
        }
    }

    pub const fn zero() -> Self {
        Self { parts: 0 }
    }

    pub const fn one() -> Self {
        Self {
            parts: PARTS_PER_UNIT,
        }
    }

    pub fn parts(&self) -> u64 {
        self.parts
    }

    /// True when the ratio lies in [0, 1].
    pub fn is_fraction(&self) -> bool {
        self.parts <= PARTS_PER_UNIT
    }

    /// `floor(amount * self)`.
    pub fn mul_floor(&self, amount: u64) -> u64 {
        self.mul_div_floor(amount, 1)
    }

    /// `floor(amount * self / divisor)`, computed exactly in 128-bit.
    ///
    /// Returns 0 when `divisor` is 0.
    pub fn mul_div_floor(&self, amount: u64, divisor: u64) -> u64 {
        if divisor == 0 {
            return 0;
        }
        let numerator = amount as u128 * self.parts as u128;
        let denominator = PARTS_PER_UNIT as u128 * divisor as u128;
        (numerator / denominator).min(u64::MAX as u128) as u64
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.parts / PARTS_PER_UNIT;
        let frac = self.parts % PARTS_PER_UNIT;
        if frac == 0 {
            write!(f, "{}", whole)
        } else {
            let frac_str = format!("{:09}", frac);
            write!(f, "{}.{}", whole, frac_str.trim_end_matches('0'))
        }
    }
}

impl FromStr for Ratio {
    type Err = VerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VerdictError::Serialization(format!("invalid decimal ratio {:?}", s));
        let (whole, frac) = match s.trim().split_once('.') {
            Some((w, f)) => (w, f),
            None => (s.trim(), ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac_parts: u64 = if frac.is_empty() {
            0
        } else {
            format!("{:0<9}", frac).parse().map_err(|_| invalid())?
        };
        let parts = whole
            .checked_mul(PARTS_PER_UNIT)
            .and_then(|p| p.checked_add(frac_parts))
            .ok_or_else(invalid)?;
        Ok(Self { parts })
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ratio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
