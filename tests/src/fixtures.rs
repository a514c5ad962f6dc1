//! # Test Fixtures
//!
//! Builders shared across the integration scenarios. Every fixture pins
//! the clock and the suffix stream, so ids, timestamps and hashes are
//! reproducible run to run.

use std::sync::Arc;

use at_01_identifiers::{FixedTimeSource, SequentialSuffixSource};
use at_02_ledger::{Ledger, LedgerApi, LedgerConfig};
use shared_types::{BatchId, BatchStatus, Quantity, Role, TransactionRecord, TransactionRequest};

/// 2024-01-15 12:00:00 UTC, in milliseconds.
pub const TS_2024_01_15: u64 = 1_705_320_000_000;

/// Route subsystem logs to the test output when `RUST_LOG` is set.
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The batch id the fixtures register by default.
pub const DEMO_BATCH_ID: &str = "AYUR-20240115-042";

pub type TestLedger = Ledger<FixedTimeSource, SequentialSuffixSource>;

/// A fresh, empty ledger on a pinned clock.
pub fn fresh_ledger() -> Arc<TestLedger> {
    Arc::new(Ledger::with_parts(
        LedgerConfig::default(),
        FixedTimeSource(TS_2024_01_15),
        SequentialSuffixSource::starting_at(0),
    ))
}

/// Register the canonical test batch: 10 kg of Ashwagandha by `farmer-1`.
pub fn register_demo_batch(ledger: &TestLedger) -> TransactionRecord {
    ledger
        .append(TransactionRequest::register_with_id(
            DEMO_BATCH_ID,
            "farmer-1",
            "Ashwagandha",
            Quantity::kg(10.0),
        ))
        .expect("registration of a fresh id must succeed")
}

/// Move the canonical batch to `Verified` via `distributor-1`.
pub fn verify_demo_batch(ledger: &TestLedger) -> TransactionRecord {
    ledger
        .append(TransactionRequest::status_change(
            DEMO_BATCH_ID,
            "distributor-1",
            Role::Distributor,
            BatchStatus::Verified,
        ))
        .expect("verification of a pending batch must succeed")
}

/// A ledger holding the canonical batch already verified.
pub fn ledger_with_verified_batch() -> (Arc<TestLedger>, BatchId) {
    let ledger = fresh_ledger();
    register_demo_batch(&ledger);
    verify_demo_batch(&ledger);
    (ledger, BatchId::from(DEMO_BATCH_ID))
}
