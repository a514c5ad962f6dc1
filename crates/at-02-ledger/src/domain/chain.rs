//! # Chain Store
//!
//! The ledger's primary in-memory bookkeeping: the global append-only log,
//! per-batch chain positions, the per-batch derived state cache, and the
//! provenance index kept in lockstep with commits.
//!
//! ## Invariants
//!
//! - `log[n].seq == n` for every committed record.
//! - `states[id]` always equals the fold of `chains[id]`'s records; the
//!   cache is advanced inside [`ChainStore::commit`], never elsewhere.

use std::collections::HashMap;

use at_03_batch_state::BatchState;
use at_04_provenance_index::ProvenanceIndex;
use shared_types::{BatchId, Hash, TransactionRecord, SENTINEL_HASH};

/// In-memory primary storage for the ledger. Not synchronized; the service
/// layer wraps it in a lock.
#[derive(Debug, Default)]
pub struct ChainStore {
    /// Global append-only log; position equals `seq`.
    log: Vec<TransactionRecord>,
    /// Batch id → seq numbers of its chain, in append order.
    chains: HashMap<BatchId, Vec<u64>>,
    /// Batch id → derived state, advanced on every commit.
    states: HashMap<BatchId, BatchState>,
    /// Secondary index maintained in lockstep.
    index: ProvenanceIndex,
}

impl ChainStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number the next committed record will carry.
    pub fn next_seq(&self) -> u64 {
        self.log.len() as u64
    }

    pub fn contains_batch(&self, batch_id: &BatchId) -> bool {
        self.chains.contains_key(batch_id)
    }

    /// Derived state of a batch, if registered.
    pub fn state(&self, batch_id: &BatchId) -> Option<&BatchState> {
        self.states.get(batch_id)
    }

    /// The most recent record of a batch's chain.
    pub fn last_record(&self, batch_id: &BatchId) -> Option<&TransactionRecord> {
        let seq = *self.chains.get(batch_id)?.last()?;
        self.log.get(seq as usize)
    }

    /// Hash the next record of this batch must chain to.
    pub fn link_hash(&self, batch_id: &BatchId) -> Hash {
        self.last_record(batch_id)
            .map(|record| record.hash)
            .unwrap_or(SENTINEL_HASH)
    }

    /// Owned snapshot of a batch's chain, in append order. Empty if the
    /// batch is unknown.
    pub fn history(&self, batch_id: &BatchId) -> Vec<TransactionRecord> {
        self.chains
            .get(batch_id)
            .map(|seqs| {
                seqs.iter()
                    .filter_map(|&seq| self.log.get(seq as usize).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Commit an already-validated record: append to the log, extend the
    /// batch's chain, advance the derived state, notify the index.
    pub fn commit(&mut self, record: TransactionRecord) {
        debug_assert_eq!(record.seq, self.next_seq());

        self.chains
            .entry(record.batch_id.clone())
            .or_default()
            .push(record.seq);

        match self.states.get_mut(&record.batch_id) {
            Some(state) => state.apply(&record),
            None => {
                if let Some(state) = BatchState::from_registration(&record) {
                    self.states.insert(record.batch_id.clone(), state);
                }
            }
        }

        self.index.on_append(&record);
        self.log.push(record);
    }

    pub fn index(&self) -> &ProvenanceIndex {
        &self.index
    }

    pub fn batch_count(&self) -> usize {
        self.chains.len()
    }

    pub fn record_count(&self) -> usize {
        self.log.len()
    }

    /// Raw mutable record access; only the tamper helpers in
    /// [`crate::test_utils`] use this.
    pub(crate) fn record_mut(&mut self, seq: u64) -> Option<&mut TransactionRecord> {
        self.log.get_mut(seq as usize)
    }
}
