//! # Chain Integrity
//!
//! Re-verification of a stored chain: recompute every record's digest and
//! confirm each `prev_hash` matches the prior record's `hash`. A mismatch
//! means the stored records were modified after commit (tamper or
//! corruption) and is fatal to trust in that chain.

use at_01_identifiers::record_hash;
use shared_types::{BatchId, LedgerError, TransactionRecord, SENTINEL_HASH};

/// Verify one batch's ordered records.
///
/// Pinpoints the first record whose recomputed digest differs from the
/// stored one or whose link to its predecessor is broken. An empty chain
/// verifies vacuously.
pub fn check_records<'a>(
    batch_id: &BatchId,
    records: impl IntoIterator<Item = &'a TransactionRecord>,
) -> Result<(), LedgerError> {
    let mut expected_prev = SENTINEL_HASH;

    for record in records {
        let violation = || LedgerError::ChainIntegrityViolation {
            batch_id: batch_id.clone(),
            seq: record.seq,
        };

        if record.prev_hash != expected_prev {
            return Err(violation());
        }

        let recomputed = record_hash(
            &record.batch_id,
            record.kind,
            &record.actor,
            &record.payload,
            &record.prev_hash,
            record.timestamp,
        );
        if recomputed != record.hash {
            return Err(violation());
        }

        expected_prev = record.hash;
    }

    Ok(())
}
