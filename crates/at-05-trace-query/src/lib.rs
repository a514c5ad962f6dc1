//! # Trace Query Subsystem (at-05)
//!
//! The read-only public face of the ledger. Composes the ledger and its
//! provenance index to answer the three consumer-facing questions:
//!
//! - what is this batch right now (status, owner, quantity)
//! - what is its full history (the audit trail behind a QR scan)
//! - which batches does an identity currently hold (dashboards)
//!
//! Never mutates. Unknown batch ids, including ids decoded from QR codes,
//! resolve to `UnknownBatch`, not a panic.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{TraceEvent, TraceReport};
pub use ports::TraceQueryApi;
pub use service::TraceQueryService;
