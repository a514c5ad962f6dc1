//! # Provenance Index
//!
//! Two mappings maintained in lockstep with the ledger:
//!
//! - `batch_id → ordered transaction seq numbers` (append-only)
//! - `owner identity → set of batch ids currently held`
//!
//! Ownership entries move on transfer: the batch leaves the transferring
//! actor's set and joins the recipient's. `BTreeSet` keeps dashboard
//! listings in stable id order.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use shared_types::{BatchId, Identity, TransactionPayload, TransactionRecord};

/// Secondary index over the ledger. Rebuildable from history; treated as a
/// cache, never as a source of truth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceIndex {
    /// Batch id → seq numbers of its records, in append order.
    transactions: HashMap<BatchId, Vec<u64>>,
    /// Owner identity → batches currently held.
    holdings: HashMap<Identity, BTreeSet<BatchId>>,
}

impl ProvenanceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one committed record into the index.
    ///
    /// Must be called exactly once per successful append, in seq order.
    pub fn on_append(&mut self, record: &TransactionRecord) {
        self.transactions
            .entry(record.batch_id.clone())
            .or_default()
            .push(record.seq);

        match &record.payload {
            TransactionPayload::Registered { .. } => {
                self.holdings
                    .entry(record.actor.clone())
                    .or_default()
                    .insert(record.batch_id.clone());
            }
            TransactionPayload::Transferred { new_owner, .. } => {
                if let Some(held) = self.holdings.get_mut(&record.actor) {
                    held.remove(&record.batch_id);
                    if held.is_empty() {
                        self.holdings.remove(&record.actor);
                    }
                }
                self.holdings
                    .entry(new_owner.clone())
                    .or_default()
                    .insert(record.batch_id.clone());
            }
            TransactionPayload::StatusChanged { .. } => {}
        }
    }

    /// Rebuild an index from a full ledger history (recovery/testing).
    pub fn rebuild<'a>(records: impl IntoIterator<Item = &'a TransactionRecord>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.on_append(record);
        }
        index
    }

    /// Ordered seq numbers of the batch's records; empty if unknown.
    pub fn transaction_ids_for(&self, batch_id: &BatchId) -> Vec<u64> {
        self.transactions.get(batch_id).cloned().unwrap_or_default()
    }

    /// Batches currently held by an identity, in id order.
    pub fn batches_owned_by(&self, owner: &Identity) -> BTreeSet<BatchId> {
        self.holdings.get(owner).cloned().unwrap_or_default()
    }

    pub fn contains_batch(&self, batch_id: &BatchId) -> bool {
        self.transactions.contains_key(batch_id)
    }

    /// Number of identities currently holding at least one batch.
    pub fn owner_count(&self) -> usize {
        self.holdings.len()
    }

    pub fn batch_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
