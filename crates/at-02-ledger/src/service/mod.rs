//! # Ledger Service
//!
//! The shared ledger instance: one `RwLock` around the [`ChainStore`],
//! with the id generator and the time/suffix ports alongside. Constructed
//! empty at startup, lives for the process lifetime; tests construct a
//! fresh instance each.

mod append;


use std::collections::BTreeSet;

use parking_lot::{Mutex, RwLock};

use at_01_identifiers::{
    BatchIdGenerator, RandomSuffixSource, SuffixSource, SystemTimeSource, TimeSource,
};
use at_03_batch_state::BatchState;
use shared_types::{BatchId, Identity, LedgerError, TransactionRecord, TransactionRequest};

use crate::domain::{check_records, ChainStore, LedgerConfig};
use crate::ports::LedgerApi;

/// The authoritative in-process ledger.
///
/// Generic over its time and suffix sources so tests can pin both; the
/// default instantiation uses the system clock and a thread RNG.
pub struct Ledger<TS = SystemTimeSource, SS = RandomSuffixSource>
where
    TS: TimeSource,
    SS: SuffixSource,
{
    pub(crate) store: RwLock<ChainStore>,
    pub(crate) generator: BatchIdGenerator,
    pub(crate) time_source: TS,
    /// Suffix sampling needs `&mut`; minting happens under the store's
    /// write lock, so contention here is incidental.
    pub(crate) suffixes: Mutex<SS>,
}

impl Ledger {
    /// A fresh, empty ledger on the system clock.
    pub fn new() -> Self {
        Self::with_parts(
            LedgerConfig::default(),
            SystemTimeSource,
            RandomSuffixSource,
        )
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl<TS, SS> Ledger<TS, SS>
where
    TS: TimeSource,
    SS: SuffixSource,
{
    /// Assemble a ledger from explicit parts.
    pub fn with_parts(config: LedgerConfig, time_source: TS, suffixes: SS) -> Self {
        Self {
            store: RwLock::new(ChainStore::new()),
            generator: BatchIdGenerator::new(config.id_prefix, config.max_id_attempts),
            time_source,
            suffixes: Mutex::new(suffixes),
        }
    }
}

impl<TS, SS> LedgerApi for Ledger<TS, SS>
where
    TS: TimeSource,
    SS: SuffixSource,
{
    fn append(&self, request: TransactionRequest) -> Result<TransactionRecord, LedgerError> {
        self.append_locked(request)
    }

    fn history(&self, batch_id: &BatchId) -> Vec<TransactionRecord> {
        self.store.read().history(batch_id)
    }

    fn check_chain(&self, batch_id: &BatchId) -> Result<(), LedgerError> {
        let store = self.store.read();
        let result = check_records(batch_id, &store.history(batch_id));
        if let Err(ref err) = result {
            tracing::warn!("[at-02] ⚠ chain verification failed: {err}");
        }
        result
    }

    fn batch_state(&self, batch_id: &BatchId) -> Option<BatchState> {
        self.store.read().state(batch_id).cloned()
    }

    fn batches_owned_by(&self, owner: &Identity) -> BTreeSet<BatchId> {
        self.store.read().index().batches_owned_by(owner)
    }

    fn transaction_ids_for(&self, batch_id: &BatchId) -> Vec<u64> {
        self.store.read().index().transaction_ids_for(batch_id)
    }

    fn batch_count(&self) -> usize {
        self.store.read().batch_count()
    }

    fn record_count(&self) -> usize {
        self.store.read().record_count()
    }
}
