//! # Test Support
//!
//! Tamper helpers for integrity tests: they mutate committed records in
//! place, which nothing in the production paths can do, so that chain
//! verification has something real to catch.

use at_01_identifiers::{SuffixSource, TimeSource};
use shared_types::Identity;

use crate::service::Ledger;

/// Flip one byte of a committed record's stored hash. Returns `false` if
/// no record has that seq.
pub fn corrupt_stored_hash<TS, SS>(ledger: &Ledger<TS, SS>, seq: u64) -> bool
where
    TS: TimeSource,
    SS: SuffixSource,
{
    let mut store = ledger.store.write();
    match store.record_mut(seq) {
        Some(record) => {
            record.hash[0] ^= 0xFF;
            true
        }
        None => false,
    }
}

/// Rewrite a committed record's actor, as an after-the-fact forgery would.
pub fn rewrite_actor<TS, SS>(ledger: &Ledger<TS, SS>, seq: u64, actor: &str) -> bool
where
    TS: TimeSource,
    SS: SuffixSource,
{
    let mut store = ledger.store.write();
    match store.record_mut(seq) {
        Some(record) => {
            record.actor = Identity::from(actor);
            true
        }
        None => false,
    }
}
