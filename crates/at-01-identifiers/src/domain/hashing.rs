//! # Canonical Record Hashing
//!
//! Computes the digest that chains a batch's records together. The digest
//! covers (batch id, kind, actor, payload, previous hash, timestamp) in a
//! fixed, length-prefixed encoding, so re-verification of a stored chain
//! reproduces every hash bit-for-bit.
//!
//! ## Canonical Encoding
//!
//! - Domain tag first, so record digests can never collide with digests of
//!   other message shapes.
//! - Every string field is encoded as `len_be_u64 || bytes`.
//! - Enum fields are encoded as a single discriminant byte.
//! - `f64` fields are encoded as their IEEE-754 big-endian bit pattern.
//! - `Option` fields are encoded as a presence byte followed by the value.

use sha2::{Digest, Sha256};
use shared_types::{
    BatchId, BatchStatus, GeoPoint, Hash, HerbType, Identity, Quantity, Role, Timestamp,
    TransactionKind, TransactionPayload, Unit,
};

/// Domain separation tag for record digests.
const RECORD_DOMAIN: &[u8] = b"ayurtrace/record/v1";

/// Compute the canonical digest of a record's chained fields.
///
/// Pure and deterministic: identical inputs always produce identical
/// output, and every field participates in the digest.
pub fn record_hash(
    batch_id: &BatchId,
    kind: TransactionKind,
    actor: &Identity,
    payload: &TransactionPayload,
    prev_hash: &Hash,
    timestamp: Timestamp,
) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(RECORD_DOMAIN);
    update_str(&mut hasher, batch_id.as_str());
    hasher.update([kind_tag(kind)]);
    update_str(&mut hasher, actor.as_str());
    update_payload(&mut hasher, payload);
    hasher.update(prev_hash);
    hasher.update(timestamp.to_be_bytes());
    hasher.finalize().into()
}

fn update_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_be_bytes());
    hasher.update(s.as_bytes());
}

fn update_opt_str(hasher: &mut Sha256, s: Option<&String>) {
    match s {
        Some(s) => {
            hasher.update([1u8]);
            update_str(hasher, s);
        }
        None => hasher.update([0u8]),
    }
}

fn update_f64(hasher: &mut Sha256, v: f64) {
    hasher.update(v.to_bits().to_be_bytes());
}

fn update_quantity(hasher: &mut Sha256, q: &Quantity) {
    update_f64(hasher, q.amount);
    hasher.update([unit_tag(q.unit)]);
}

fn update_herb(hasher: &mut Sha256, herb: &HerbType) {
    update_str(hasher, herb.as_str());
}

fn update_geo(hasher: &mut Sha256, geo: Option<&GeoPoint>) {
    match geo {
        Some(g) => {
            hasher.update([1u8]);
            update_f64(hasher, g.lat);
            update_f64(hasher, g.lng);
            update_str(hasher, &g.address);
        }
        None => hasher.update([0u8]),
    }
}

fn update_payload(hasher: &mut Sha256, payload: &TransactionPayload) {
    match payload {
        TransactionPayload::Registered {
            herb_type,
            quantity,
            origin,
            notes,
        } => {
            hasher.update([0x01]);
            update_herb(hasher, herb_type);
            update_quantity(hasher, quantity);
            update_geo(hasher, origin.as_ref());
            update_opt_str(hasher, notes.as_ref());
        }
        TransactionPayload::Transferred {
            new_owner,
            new_owner_role,
            notes,
        } => {
            hasher.update([0x02]);
            update_str(hasher, new_owner.as_str());
            hasher.update([role_tag(*new_owner_role)]);
            update_opt_str(hasher, notes.as_ref());
        }
        TransactionPayload::StatusChanged { new_status, notes } => {
            hasher.update([0x03]);
            hasher.update([status_tag(*new_status)]);
            update_opt_str(hasher, notes.as_ref());
        }
    }
}

fn kind_tag(kind: TransactionKind) -> u8 {
    match kind {
        TransactionKind::Registered => 0x01,
        TransactionKind::Transferred => 0x02,
        TransactionKind::StatusChanged => 0x03,
    }
}

fn role_tag(role: Role) -> u8 {
    match role {
        Role::Farmer => 0x01,
        Role::Distributor => 0x02,
        Role::Retailer => 0x03,
        Role::Consumer => 0x04,
    }
}

fn status_tag(status: BatchStatus) -> u8 {
    match status {
        BatchStatus::Pending => 0x01,
        BatchStatus::Verified => 0x02,
        BatchStatus::Rejected => 0x03,
    }
}

fn unit_tag(unit: Unit) -> u8 {
    match unit {
        Unit::Kg => 0x01,
        Unit::Tons => 0x02,
        Unit::Lbs => 0x03,
    }
}
