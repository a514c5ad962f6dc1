//! # Ledger Domain
//!
//! - `chain` - the in-memory log and per-batch chain bookkeeping
//! - `config` - ledger construction parameters
//! - `integrity` - chain re-verification

mod chain;
mod config;
mod integrity;

pub use chain::ChainStore;
pub use config::LedgerConfig;
pub use integrity::check_records;
