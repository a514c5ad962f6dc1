//! # Ledger Subsystem (at-02)
//!
//! The append-only, hash-linked transaction log that is the sole source of
//! truth for batch state. Every state-changing event on a batch (creation,
//! verification, rejection, ownership transfer) is one committed
//! [`TransactionRecord`](shared_types::TransactionRecord); a batch's
//! current state is the fold of its chain.
//!
//! ## Append Flow
//!
//! ```text
//! TransactionRequest ──→ [resolve/mint batch id]
//!                              │
//!                              ↓
//!                    [at-03 legality check]──✗──→ typed LedgerError
//!                              │
//!                              ↓
//!            [stamp timestamp, chain prev_hash, digest]
//!                              │
//!                              ↓
//!              [commit record, fold state, notify at-04]
//! ```
//!
//! ## Domain Invariants
//!
//! - `append` is the only mutator in the core; every other operation is a
//!   read-only projection.
//! - On validation failure the ledger is left unchanged; there are no
//!   partial writes.
//! - For every batch, the ordered `prev_hash` values form a singly linked
//!   chain with no branches, starting at the sentinel.
//! - Timestamps are non-decreasing within a batch's chain.
//!
//! ## Concurrency
//!
//! One `parking_lot::RwLock` guards the whole inner state. The
//! check-then-act of `append` runs entirely under the write lock, so two
//! racing transfers of the same batch can never both validate against a
//! stale owner. Reads take the read lock and return owned snapshots that
//! later appends cannot mutate.

pub mod domain;
pub mod ports;
pub mod service;
pub mod test_utils;

pub use domain::{check_records, ChainStore, LedgerConfig};
pub use ports::LedgerApi;
pub use service::Ledger;
