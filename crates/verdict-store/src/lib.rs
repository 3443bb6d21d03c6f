// crates/verdict-store/src/lib.rs
//
// verdict-store: Storage layer for the Verdict engine.
//
// Provides an ordered in-memory store, a RocksDB-backed persistent store,
// and the wrappers a host composes around them for one state transition:
// a namespaced partition per service, gas metering, and a write-staging
// branch that is committed or discarded at the transition boundary.

pub mod branch;
pub mod gas;
pub mod mem;
pub mod prefix;
pub mod rocks;

// Re-export key types for ergonomic access from downstream crates.
pub use branch::BranchStore;
pub use gas::{GasConfig, GasMeter, GasMeteredStore};
pub use mem::MemStore;
pub use prefix::PrefixStore;
pub use rocks::RocksStore;
