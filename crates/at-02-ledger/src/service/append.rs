//! # Append Path
//!
//! The single mutating operation. The whole sequence (id resolution,
//! legality check, timestamp stamping, hash chaining, commit) runs under
//! the store's write lock, so validation can never act on stale state.

use at_01_identifiers::{record_hash, IdError, SuffixSource, TimeSource};
use shared_types::{
    BatchId, LedgerError, TransactionKind, TransactionRecord, TransactionRequest,
};

use super::Ledger;
use crate::domain::ChainStore;

impl<TS, SS> Ledger<TS, SS>
where
    TS: TimeSource,
    SS: SuffixSource,
{
    pub(crate) fn append_locked(
        &self,
        request: TransactionRequest,
    ) -> Result<TransactionRecord, LedgerError> {
        let now = self.time_source.now();
        let mut store = self.store.write();

        let batch_id = self.resolve_batch_id(&store, &request, now)?;

        if let Err(err) = at_03_batch_state::validate(
            &batch_id,
            store.state(&batch_id),
            &request.actor,
            request.actor_role,
            &request.payload,
        ) {
            tracing::warn!(
                "[at-02] ✗ rejected {} for batch {batch_id}: {err}",
                request.kind()
            );
            return Err(err);
        }

        // Timestamps never regress within a chain, even if the wall clock
        // does.
        let timestamp = store
            .last_record(&batch_id)
            .map(|last| now.max(last.timestamp))
            .unwrap_or(now);

        let prev_hash = store.link_hash(&batch_id);
        let kind = request.kind();
        let hash = record_hash(
            &batch_id,
            kind,
            &request.actor,
            &request.payload,
            &prev_hash,
            timestamp,
        );

        let record = TransactionRecord {
            seq: store.next_seq(),
            batch_id,
            kind,
            actor: request.actor,
            payload: request.payload,
            prev_hash,
            hash,
            timestamp,
        };
        store.commit(record.clone());

        tracing::info!(
            "[at-02] ✓ #{} {} for batch {} by {} (0x{})",
            record.seq,
            record.kind,
            record.batch_id,
            record.actor,
            hex::encode(&record.hash[..8])
        );
        Ok(record)
    }

    /// Use the caller's batch id, or mint one for a registration.
    fn resolve_batch_id(
        &self,
        store: &ChainStore,
        request: &TransactionRequest,
        now: shared_types::Timestamp,
    ) -> Result<BatchId, LedgerError> {
        match (&request.batch_id, request.kind()) {
            (Some(id), _) => Ok(id.clone()),
            (None, TransactionKind::Registered) => {
                let mut suffixes = self.suffixes.lock();
                self.generator
                    .mint(now, &mut *suffixes, |candidate| {
                        store.contains_batch(candidate)
                    })
                    .map_err(|IdError::SuffixSpaceExhausted { attempts }| {
                        LedgerError::IdExhausted { attempts }
                    })
            }
            // Only registration may omit the id; anything else without one
            // cannot name a chain.
            (None, _) => Err(LedgerError::UnknownBatch {
                batch_id: BatchId::new(""),
            }),
        }
    }
}
