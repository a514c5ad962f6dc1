//! # Trace Report
//!
//! The human-readable audit trail rendered behind a consumer's QR scan.

use serde::{Deserialize, Serialize};

use shared_types::{
    Batch, Hash, Identity, Timestamp, TransactionKind, TransactionPayload, TransactionRecord,
};

/// Full provenance of one batch: its current view plus every recorded
/// event, in chain order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceReport {
    pub batch: Batch,
    pub events: Vec<TraceEvent>,
    /// Outcome of re-verifying the chain's hash links at read time.
    pub chain_verified: bool,
}

/// One event in the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub seq: u64,
    pub timestamp: Timestamp,
    pub actor: Identity,
    pub kind: TransactionKind,
    /// One-line description for display, e.g.
    /// `farmer-1 registered 10 kg of Ashwagandha`.
    pub summary: String,
    pub hash: Hash,
}

impl TraceEvent {
    pub fn from_record(record: &TransactionRecord) -> Self {
        Self {
            seq: record.seq,
            timestamp: record.timestamp,
            actor: record.actor.clone(),
            kind: record.kind,
            summary: summarize(record),
            hash: record.hash,
        }
    }

    /// Abbreviated digest for display, e.g. `0x1a2b3c4d`.
    pub fn short_hash(&self) -> String {
        format!("0x{}", hex::encode(&self.hash[..4]))
    }
}

fn summarize(record: &TransactionRecord) -> String {
    match &record.payload {
        TransactionPayload::Registered {
            herb_type,
            quantity,
            origin,
            ..
        } => match origin {
            Some(geo) => format!(
                "{} registered {} of {} at {}",
                record.actor, quantity, herb_type, geo.address
            ),
            None => format!(
                "{} registered {} of {}",
                record.actor, quantity, herb_type
            ),
        },
        TransactionPayload::Transferred {
            new_owner,
            new_owner_role,
            ..
        } => format!(
            "{} transferred custody to {} ({})",
            record.actor, new_owner, new_owner_role
        ),
        TransactionPayload::StatusChanged { new_status, notes } => match notes {
            Some(note) => format!(
                "{} marked the batch {}: {}",
                record.actor, new_status, note
            ),
            None => format!("{} marked the batch {}", record.actor, new_status),
        },
    }
}
