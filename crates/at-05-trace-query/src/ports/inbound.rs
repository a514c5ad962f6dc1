//! # Inbound Ports (Driving Ports)

use shared_types::{Batch, BatchId, Identity, LedgerError, QrPayload};

use crate::domain::TraceReport;

/// Read-only query API composed over the ledger.
pub trait TraceQueryApi {
    /// Current view of a batch.
    ///
    /// ## Returns
    ///
    /// - `Ok(Batch)`: status, owner and quantity folded from the chain
    /// - `Err(UnknownBatch)`: no chain exists for this id
    fn batch_view(&self, batch_id: &BatchId) -> Result<Batch, LedgerError>;

    /// Full audit trail for consumer-facing trace lookups.
    fn trace(&self, batch_id: &BatchId) -> Result<TraceReport, LedgerError>;

    /// Batches currently held by an identity, in id order.
    fn batches_owned_by(&self, owner: &Identity) -> Vec<Batch>;

    /// Compact payload for the QR-encoding collaborator; sufficient to
    /// re-look-up the batch with no additional context.
    fn qr_payload(&self, batch_id: &BatchId) -> Result<QrPayload, LedgerError>;
}
