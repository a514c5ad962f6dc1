//! # Inbound Ports (Driving Ports)
//!
//! The public API the ledger exposes to callers and to the trace query
//! subsystem.

use std::collections::BTreeSet;

use at_03_batch_state::BatchState;
use shared_types::{BatchId, Identity, LedgerError, TransactionRecord, TransactionRequest};

/// Primary API of the ledger subsystem.
///
/// `append` is the only mutator; everything else is a read-only
/// projection. All methods take `&self`; implementations synchronize
/// internally so one shared instance can serve concurrent callers.
pub trait LedgerApi: Send + Sync {
    /// Validate and commit one transaction.
    ///
    /// ## Returns
    ///
    /// - `Ok(TransactionRecord)`: the committed record, including its
    ///   digest, for display by the caller
    /// - `Err(LedgerError)`: the violated rule; the ledger is unchanged
    fn append(&self, request: TransactionRequest) -> Result<TransactionRecord, LedgerError>;

    /// Owned snapshot of a batch's chain in append order; empty if the
    /// batch is unknown. Later appends never mutate a returned snapshot.
    fn history(&self, batch_id: &BatchId) -> Vec<TransactionRecord>;

    /// Recompute every digest in the batch's chain and confirm the
    /// `prev_hash` links. `false` means tamper or corruption.
    fn verify_chain(&self, batch_id: &BatchId) -> bool {
        self.check_chain(batch_id).is_ok()
    }

    /// Like [`LedgerApi::verify_chain`], but pinpoints the first bad
    /// record.
    fn check_chain(&self, batch_id: &BatchId) -> Result<(), LedgerError>;

    /// Derived current state of a batch.
    fn batch_state(&self, batch_id: &BatchId) -> Option<BatchState>;

    /// Batches currently held by an identity, in id order.
    fn batches_owned_by(&self, owner: &Identity) -> BTreeSet<BatchId>;

    /// Ordered seq numbers of a batch's records; empty if unknown.
    fn transaction_ids_for(&self, batch_id: &BatchId) -> Vec<u64>;

    /// Number of registered batches.
    fn batch_count(&self) -> usize;

    /// Number of committed records across all batches.
    fn record_count(&self) -> usize;
}
