//! # Derived Batch State
//!
//! The fold of a batch's transaction history. Constructed from the
//! registration record and advanced one validated record at a time; a full
//! replay of the same history always reproduces the same state.

use serde::{Deserialize, Serialize};
use shared_types::{
    Batch, BatchId, BatchStatus, HerbType, Identity, Quantity, Timestamp, TransactionPayload,
    TransactionRecord,
};

/// Current state of one batch, derived from its chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchState {
    pub batch_id: BatchId,
    pub herb_type: HerbType,
    pub quantity: Quantity,
    pub origin_owner: Identity,
    pub current_owner: Identity,
    pub status: BatchStatus,
    pub created_at: Timestamp,
    /// Timestamp of the most recently applied record.
    pub updated_at: Timestamp,
}

impl BatchState {
    /// Build the initial state from a `Registered` record.
    ///
    /// Registration implicitly sets status to `Pending` and owner to the
    /// registering actor. Returns `None` for any other record kind.
    pub fn from_registration(record: &TransactionRecord) -> Option<Self> {
        match &record.payload {
            TransactionPayload::Registered {
                herb_type,
                quantity,
                ..
            } => Some(Self {
                batch_id: record.batch_id.clone(),
                herb_type: herb_type.clone(),
                quantity: *quantity,
                origin_owner: record.actor.clone(),
                current_owner: record.actor.clone(),
                status: BatchStatus::Pending,
                created_at: record.timestamp,
                updated_at: record.timestamp,
            }),
            _ => None,
        }
    }

    /// Advance the state by one already-validated record.
    ///
    /// Quantity and origin are fixed at registration; no later record kind
    /// can amend them.
    pub fn apply(&mut self, record: &TransactionRecord) {
        match &record.payload {
            TransactionPayload::Registered { .. } => {}
            TransactionPayload::Transferred { new_owner, .. } => {
                self.current_owner = new_owner.clone();
            }
            TransactionPayload::StatusChanged { new_status, .. } => {
                self.status = *new_status;
            }
        }
        self.updated_at = record.timestamp;
    }

    /// Fold an ordered history into its final state.
    ///
    /// Returns `None` for an empty history or one that does not start with
    /// a registration.
    pub fn replay<'a>(records: impl IntoIterator<Item = &'a TransactionRecord>) -> Option<Self> {
        let mut iter = records.into_iter();
        let mut state = Self::from_registration(iter.next()?)?;
        for record in iter {
            state.apply(record);
        }
        Some(state)
    }

    /// The externally-visible view of this state.
    pub fn to_batch(&self) -> Batch {
        Batch {
            id: self.batch_id.clone(),
            herb_type: self.herb_type.clone(),
            quantity: self.quantity,
            origin_owner: self.origin_owner.clone(),
            current_owner: self.current_owner.clone(),
            status: self.status,
            created_at: self.created_at,
        }
    }
}
