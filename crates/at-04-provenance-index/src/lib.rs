//! # Provenance Index Subsystem (at-04)
//!
//! Secondary index over the ledger for fast lookup and tracing: batch id to
//! ordered transaction ids, and owner identity to currently-held batches.
//!
//! ## Domain Invariants
//!
//! - **Lockstep**: `on_append` is invoked exactly once per committed
//!   record, in sequence order.
//! - **Rebuildable**: replaying the full ledger history produces an index
//!   equal to the incrementally maintained one. The index is a cache,
//!   never a source of truth.

pub mod domain;

pub use domain::ProvenanceIndex;
