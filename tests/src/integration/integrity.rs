//! # Integrity and Rebuild Scenarios
//!
//! Tamper detection across committed chains, and equivalence of the
//! incrementally maintained provenance index with a full rebuild.

#[cfg(test)]
mod tests {
    use at_02_ledger::{test_utils, LedgerApi};
    use at_04_provenance_index::ProvenanceIndex;
    use shared_types::{BatchId, Identity, LedgerError, Quantity, Role, TransactionRequest};

    use crate::fixtures::{fresh_ledger, ledger_with_verified_batch, DEMO_BATCH_ID};

    #[test]
    fn test_legal_appends_keep_every_chain_verifiable() {
        let (ledger, batch_id) = ledger_with_verified_batch();
        ledger
            .append(TransactionRequest::register(
                "farmer-2",
                "Brahmi",
                Quantity::kg(7.0),
            ))
            .unwrap();
        ledger
            .append(TransactionRequest::transfer(
                batch_id.clone(),
                "farmer-1",
                Role::Farmer,
                "retailer-9",
                Role::Retailer,
            ))
            .unwrap();

        assert!(ledger.verify_chain(&batch_id));
        assert!(ledger.verify_chain(&BatchId::from("AYUR-20240115-000")));
    }

    #[test]
    fn test_tampering_one_chain_spares_the_others() {
        let (ledger, batch_id) = ledger_with_verified_batch();
        let other = ledger
            .append(TransactionRequest::register(
                "farmer-2",
                "Brahmi",
                Quantity::kg(7.0),
            ))
            .unwrap()
            .batch_id;

        // Forge the verified batch's registration record.
        assert!(test_utils::rewrite_actor(&ledger, 0, "farmer-99"));

        assert_eq!(
            ledger.check_chain(&batch_id),
            Err(LedgerError::ChainIntegrityViolation {
                batch_id: batch_id.clone(),
                seq: 0,
            })
        );
        assert!(ledger.verify_chain(&other));
    }

    #[test]
    fn test_corrupted_middle_record_is_pinpointed() {
        let (ledger, batch_id) = ledger_with_verified_batch();
        ledger
            .append(TransactionRequest::transfer(
                batch_id.clone(),
                "farmer-1",
                Role::Farmer,
                "retailer-9",
                Role::Retailer,
            ))
            .unwrap();

        // Seq 1 is the verification record in the middle of the chain.
        assert!(test_utils::corrupt_stored_hash(&ledger, 1));

        assert_eq!(
            ledger.check_chain(&batch_id),
            Err(LedgerError::ChainIntegrityViolation {
                batch_id: batch_id.clone(),
                seq: 1,
            })
        );
    }

    #[test]
    fn test_index_rebuild_matches_incremental_state() {
        let (ledger, batch_id) = ledger_with_verified_batch();
        ledger
            .append(TransactionRequest::register(
                "farmer-2",
                "Giloy",
                Quantity::kg(3.0),
            ))
            .unwrap();
        ledger
            .append(TransactionRequest::transfer(
                batch_id.clone(),
                "farmer-1",
                Role::Farmer,
                "retailer-9",
                Role::Retailer,
            ))
            .unwrap();

        // Replay every chain's history into a fresh index.
        let minted = BatchId::from("AYUR-20240115-000");
        let mut all_records: Vec<_> = ledger
            .history(&batch_id)
            .into_iter()
            .chain(ledger.history(&minted))
            .collect();
        all_records.sort_by_key(|record| record.seq);
        let rebuilt = ProvenanceIndex::rebuild(&all_records);

        assert_eq!(
            rebuilt.batches_owned_by(&Identity::from("retailer-9")),
            ledger.batches_owned_by(&Identity::from("retailer-9"))
        );
        assert_eq!(
            rebuilt.batches_owned_by(&Identity::from("farmer-2")),
            ledger.batches_owned_by(&Identity::from("farmer-2"))
        );
        assert_eq!(
            rebuilt.transaction_ids_for(&batch_id),
            ledger.transaction_ids_for(&batch_id)
        );
        assert!(ledger
            .batches_owned_by(&Identity::from("farmer-1"))
            .is_empty());
    }

    #[test]
    fn test_demo_batch_chain_survives_unrelated_tampering() {
        let ledger = fresh_ledger();
        let other = ledger
            .append(TransactionRequest::register(
                "farmer-2",
                "Amla",
                Quantity::kg(9.0),
            ))
            .unwrap();
        crate::fixtures::register_demo_batch(&ledger);

        assert!(test_utils::corrupt_stored_hash(&ledger, other.seq));
        assert!(ledger.verify_chain(&BatchId::from(DEMO_BATCH_ID)));
        assert!(!ledger.verify_chain(&other.batch_id));
    }
}
