//! # Lifecycle Flows
//!
//! The full register → verify → transfer journey across the ledger, the
//! state machine, the index, and the trace query service.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use at_02_ledger::LedgerApi;
    use at_05_trace_query::{TraceQueryApi, TraceQueryService};
    use shared_types::{
        BatchId, BatchStatus, Identity, LedgerError, Quantity, Role, TransactionKind,
        TransactionRequest,
    };

    use crate::fixtures::{
        fresh_ledger, ledger_with_verified_batch, register_demo_batch, verify_demo_batch,
        DEMO_BATCH_ID,
    };

    // =========================================================================
    // END-TO-END JOURNEY
    // =========================================================================

    #[test]
    fn test_register_verify_transfer_journey() {
        let ledger = fresh_ledger();
        let batch_id = BatchId::from(DEMO_BATCH_ID);

        // Farmer registers the harvest.
        register_demo_batch(&ledger);
        let history = ledger.history(&batch_id);
        assert_eq!(history.len(), 1);
        let state = ledger.batch_state(&batch_id).unwrap();
        assert_eq!(state.status, BatchStatus::Pending);
        assert_eq!(state.current_owner, Identity::from("farmer-1"));

        // Distributor verifies quality.
        verify_demo_batch(&ledger);
        let state = ledger.batch_state(&batch_id).unwrap();
        assert_eq!(state.status, BatchStatus::Verified);

        // The holder moves the batch down the chain.
        ledger
            .append(TransactionRequest::transfer(
                DEMO_BATCH_ID,
                "farmer-1",
                Role::Farmer,
                "retailer-9",
                Role::Retailer,
            ))
            .unwrap();

        let state = ledger.batch_state(&batch_id).unwrap();
        assert_eq!(state.current_owner, Identity::from("retailer-9"));
        assert_eq!(state.status, BatchStatus::Verified);
        assert_eq!(state.origin_owner, Identity::from("farmer-1"));
        assert_eq!(ledger.history(&batch_id).len(), 3);
        assert!(ledger.verify_chain(&batch_id));
    }

    #[test]
    fn test_only_the_holder_may_transfer() {
        let (ledger, batch_id) = ledger_with_verified_batch();

        // The verifying distributor never took custody; the batch still
        // belongs to the farmer.
        let result = ledger.append(TransactionRequest::transfer(
            batch_id.clone(),
            "distributor-1",
            Role::Distributor,
            "retailer-9",
            Role::Retailer,
        ));

        assert!(matches!(result, Err(LedgerError::NotCurrentOwner { .. })));
        assert_eq!(ledger.history(&batch_id).len(), 2);
    }

    #[test]
    fn test_custody_chain_across_three_parties() {
        let (ledger, batch_id) = ledger_with_verified_batch();

        ledger
            .append(TransactionRequest::transfer(
                batch_id.clone(),
                "farmer-1",
                Role::Farmer,
                "distributor-1",
                Role::Distributor,
            ))
            .unwrap();
        ledger
            .append(TransactionRequest::transfer(
                batch_id.clone(),
                "distributor-1",
                Role::Distributor,
                "retailer-9",
                Role::Retailer,
            ))
            .unwrap();

        let state = ledger.batch_state(&batch_id).unwrap();
        assert_eq!(state.current_owner, Identity::from("retailer-9"));
        assert_eq!(ledger.history(&batch_id).len(), 4);
        assert!(ledger.verify_chain(&batch_id));
    }

    #[test]
    fn test_rejected_batch_reopens_through_re_review() {
        let ledger = fresh_ledger();
        let batch_id = BatchId::from(DEMO_BATCH_ID);
        register_demo_batch(&ledger);

        ledger
            .append(TransactionRequest::status_change(
                DEMO_BATCH_ID,
                "distributor-1",
                Role::Distributor,
                BatchStatus::Rejected,
            ))
            .unwrap();

        // Rejected batches cannot move.
        let result = ledger.append(TransactionRequest::transfer(
            DEMO_BATCH_ID,
            "farmer-1",
            Role::Farmer,
            "retailer-9",
            Role::Retailer,
        ));
        assert!(matches!(
            result,
            Err(LedgerError::NotVerifiedForTransfer {
                status: BatchStatus::Rejected,
                ..
            })
        ));

        // Re-review back to pending, then verify.
        ledger
            .append(TransactionRequest::status_change(
                DEMO_BATCH_ID,
                "distributor-1",
                Role::Distributor,
                BatchStatus::Pending,
            ))
            .unwrap();
        verify_demo_batch(&ledger);

        let state = ledger.batch_state(&batch_id).unwrap();
        assert_eq!(state.status, BatchStatus::Verified);
        assert!(ledger.verify_chain(&batch_id));
    }

    #[test]
    fn test_history_is_idempotent_between_appends() {
        let (ledger, batch_id) = ledger_with_verified_batch();
        assert_eq!(ledger.history(&batch_id), ledger.history(&batch_id));
    }

    // =========================================================================
    // TRACE QUERY FLOWS
    // =========================================================================

    #[test]
    fn test_consumer_trace_after_full_journey() {
        let (ledger, batch_id) = ledger_with_verified_batch();
        ledger
            .append(
                TransactionRequest::transfer(
                    batch_id.clone(),
                    "farmer-1",
                    Role::Farmer,
                    "retailer-9",
                    Role::Retailer,
                )
                .with_notes("cold-chain truck 14"),
            )
            .unwrap();

        let service = TraceQueryService::new(Arc::clone(&ledger));
        let report = service.trace(&batch_id).unwrap();

        assert!(report.chain_verified);
        assert_eq!(report.events.len(), 3);
        assert_eq!(report.events[0].kind, TransactionKind::Registered);
        assert_eq!(report.events[2].kind, TransactionKind::Transferred);
        assert_eq!(report.batch.current_owner, Identity::from("retailer-9"));
    }

    #[test]
    fn test_qr_payload_resolves_back_to_the_batch() {
        let (ledger, batch_id) = ledger_with_verified_batch();
        let service = TraceQueryService::new(Arc::clone(&ledger));

        let payload = service.qr_payload(&batch_id).unwrap();
        let batch = service.batch_view(&payload.batch_id).unwrap();

        assert_eq!(batch.id, batch_id);
        assert_eq!(batch.herb_type.as_str(), "Ashwagandha");
        assert_eq!(batch.quantity, Quantity::kg(10.0));
    }

    #[test]
    fn test_scanned_unknown_id_yields_unknown_batch() {
        let (ledger, _) = ledger_with_verified_batch();
        let service = TraceQueryService::new(Arc::clone(&ledger));

        // A scanner can hand over any string as a batch id.
        let result = service.trace(&BatchId::from("AYUR-20231301-000"));
        assert!(matches!(result, Err(LedgerError::UnknownBatch { .. })));
    }

    #[test]
    fn test_dashboard_listing_tracks_custody() {
        let (ledger, batch_id) = ledger_with_verified_batch();
        let service = TraceQueryService::new(Arc::clone(&ledger));

        assert_eq!(
            service.batches_owned_by(&Identity::from("farmer-1")).len(),
            1
        );

        ledger
            .append(TransactionRequest::transfer(
                batch_id.clone(),
                "farmer-1",
                Role::Farmer,
                "retailer-9",
                Role::Retailer,
            ))
            .unwrap();

        assert!(service
            .batches_owned_by(&Identity::from("farmer-1"))
            .is_empty());
        let held = service.batches_owned_by(&Identity::from("retailer-9"));
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].id, batch_id);
    }
}
