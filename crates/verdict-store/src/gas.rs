// crates/verdict-store/src/gas.rs
//
// Gas metering for store access.
//
// Every read, write, delete and iterator step is charged against the meter
// of the current state transition. Once the limit is crossed every further
// access fails with `VerdictError::OutOfGas`; callers propagate it unchanged
// and the host discards the transition.

use std::cell::Cell;

use verdict_core::error::VerdictError;
use verdict_core::traits::{KvIter, KvStore};

/// Per-operation costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasConfig {
    pub has_cost: u64,
    pub delete_cost: u64,
    pub read_cost_flat: u64,
    pub read_cost_per_byte: u64,
    pub write_cost_flat: u64,
    pub write_cost_per_byte: u64,
    pub iter_next_cost_flat: u64,
}

impl GasConfig {
    /// Default key/value costs.
    pub const fn kv_default() -> Self {
        Self {
            has_cost: 1_000,
            delete_cost: 1_000,
            read_cost_flat: 1_000,
            read_cost_per_byte: 3,
            write_cost_flat: 2_000,
            write_cost_per_byte: 30,
            iter_next_cost_flat: 30,
        }
    }
}

impl Default for GasConfig {
    fn default() -> Self {
        Self::kv_default()
    }
}

/// Tracks gas consumed within one state transition.
#[derive(Debug)]
pub struct GasMeter {
    limit: Option<u64>,
    consumed: Cell<u64>,
}

impl GasMeter {
    pub fn new(limit: u64) -> Self {
        Self {
            limit: Some(limit),
            consumed: Cell::new(0),
        }
    }

    /// A meter that counts but never runs out.
    pub fn infinite() -> Self {
        Self {
            limit: None,
            consumed: Cell::new(0),
        }
    }

    pub fn consumed(&self) -> u64 {
        self.consumed.get()
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.limit, Some(limit) if self.consumed.get() > limit)
    }

    /// Charge `amount`. Fails once the running total exceeds the limit.
    pub fn consume(&self, amount: u64, descriptor: &'static str) -> Result<(), VerdictError> {
        let consumed = self.consumed.get().saturating_add(amount);
        self.consumed.set(consumed);
        match self.limit {
            Some(limit) if consumed > limit => Err(VerdictError::OutOfGas {
                descriptor,
                limit,
                consumed,
            }),
            _ => Ok(()),
        }
    }
}

/// Store wrapper charging every access to a shared `GasMeter`.
#[derive(Debug)]
pub struct GasMeteredStore<'m, S> {
    parent: S,
    meter: &'m GasMeter,
    config: GasConfig,
}

impl<'m, S: KvStore> GasMeteredStore<'m, S> {
    pub fn new(parent: S, meter: &'m GasMeter, config: GasConfig) -> Self {
        Self {
            parent,
            meter,
            config,
        }
    }

    fn per_byte(bytes: usize, cost: u64) -> u64 {
        (bytes as u64).saturating_mul(cost)
    }
}

impl<S: KvStore> KvStore for GasMeteredStore<'_, S> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, VerdictError> {
        self.meter.consume(self.config.read_cost_flat, "ReadFlat")?;
        let value = self.parent.get(key)?;
        let bytes = key.len() + value.as_ref().map_or(0, Vec::len);
        self.meter.consume(
            Self::per_byte(bytes, self.config.read_cost_per_byte),
            "ReadPerByte",
        )?;
        Ok(value)
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), VerdictError> {
        self.meter.consume(self.config.write_cost_flat, "WriteFlat")?;
        self.meter.consume(
            Self::per_byte(key.len() + value.len(), self.config.write_cost_per_byte),
            "WritePerByte",
        )?;
        self.parent.set(key, value)
    }

    fn delete(&self, key: &[u8]) -> Result<(), VerdictError> {
        self.meter.consume(self.config.delete_cost, "Delete")?;
        self.parent.delete(key)
    }

    fn has(&self, key: &[u8]) -> Result<bool, VerdictError> {
        self.meter.consume(self.config.has_cost, "Has")?;
        Ok(self.parent.get(key)?.is_some())
    }

    fn prefix_iter<'a>(&'a self, prefix: &[u8]) -> KvIter<'a> {
        let meter = self.meter;
        let config = self.config;
        let mut halted = false;
        let iter = self.parent.prefix_iter(prefix).map_while(move |item| {
            if halted {
                return None;
            }
            let charged = meter
                .consume(config.iter_next_cost_flat, "IterNextFlat")
                .and_then(|_| {
                    let (key, value) = item?;
                    meter.consume(
                        Self::per_byte(key.len() + value.len(), config.read_cost_per_byte),
                        "ValuePerByte",
                    )?;
                    Ok((key, value))
                });
            if charged.is_err() {
                halted = true;
            }
            Some(charged)
        });
        Box::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mem::MemStore;

    #[test]
    fn test_charges_reads_and_writes() {
        let db = MemStore::new();
        let meter = GasMeter::infinite();
        let store = GasMeteredStore::new(&db, &meter, GasConfig::kv_default());

        store.set(b"ab", b"cd").unwrap();
        assert_eq!(meter.consumed(), 2_000 + 4 * 30);

        store.get(b"ab").unwrap();
        assert_eq!(meter.consumed(), 2_120 + 1_000 + 4 * 3);
        assert!(!meter.is_exhausted());
    }

    #[test]
    fn test_out_of_gas_is_reported() {
        let db = MemStore::new();
        let meter = GasMeter::new(1_500);
        let store = GasMeteredStore::new(&db, &meter, GasConfig::kv_default());

        let err = store.set(b"key", b"value").unwrap_err();
        assert!(err.is_out_of_gas());
        assert!(meter.is_exhausted());
        // Nothing reached the parent.
        assert!(db.is_empty());
    }

    #[test]
    fn test_iteration_halts_after_exhaustion() {
        let db = MemStore::new();
        for i in 0..10u8 {
            db.set(&[b'p', i], b"").unwrap();
        }
        let meter = GasMeter::new(100);
        let store = GasMeteredStore::new(&db, &meter, GasConfig::kv_default());

        let items: Vec<_> = store.prefix_iter(b"p").collect();
        // 30 + 6 per step: two steps fit, the third crosses the limit.
        assert_eq!(items.len(), 3);
        assert!(items[0].is_ok());
        assert!(items[1].is_ok());
        assert!(items[2].as_ref().unwrap_err().is_out_of_gas());
    }
}
