//! # Trace Query Service
//!
//! Read-only composition over a shared ledger instance.

use std::sync::Arc;

use at_02_ledger::LedgerApi;
use shared_types::{Batch, BatchId, Identity, LedgerError, QrPayload};

use crate::domain::{TraceEvent, TraceReport};
use crate::ports::TraceQueryApi;

/// Answers provenance queries against a shared ledger.
pub struct TraceQueryService<L: LedgerApi> {
    ledger: Arc<L>,
}

impl<L: LedgerApi> TraceQueryService<L> {
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }
}

impl<L: LedgerApi> TraceQueryApi for TraceQueryService<L> {
    fn batch_view(&self, batch_id: &BatchId) -> Result<Batch, LedgerError> {
        self.ledger
            .batch_state(batch_id)
            .map(|state| state.to_batch())
            .ok_or_else(|| LedgerError::UnknownBatch {
                batch_id: batch_id.clone(),
            })
    }

    fn trace(&self, batch_id: &BatchId) -> Result<TraceReport, LedgerError> {
        let batch = self.batch_view(batch_id)?;
        let events = self
            .ledger
            .history(batch_id)
            .iter()
            .map(TraceEvent::from_record)
            .collect();

        Ok(TraceReport {
            batch,
            events,
            chain_verified: self.ledger.verify_chain(batch_id),
        })
    }

    fn batches_owned_by(&self, owner: &Identity) -> Vec<Batch> {
        self.ledger
            .batches_owned_by(owner)
            .iter()
            .filter_map(|batch_id| {
                self.ledger
                    .batch_state(batch_id)
                    .map(|state| state.to_batch())
            })
            .collect()
    }

    fn qr_payload(&self, batch_id: &BatchId) -> Result<QrPayload, LedgerError> {
        let batch = self.batch_view(batch_id)?;
        Ok(QrPayload {
            batch_id: batch.id,
            herb_type: batch.herb_type,
            quantity: batch.quantity,
            registered_by: batch.origin_owner,
            created_at: batch.created_at,
        })
    }
}
