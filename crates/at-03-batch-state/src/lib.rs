//! # Batch State Subsystem (at-03)
//!
//! Derives a batch's current state from its transaction history and
//! enforces which transactions may legally extend that history.
//!
//! ## State Machine
//!
//! ```text
//! Unregistered ──Registered──→ Pending ──StatusChanged──→ {Verified, Rejected}
//!                                 ↑                             │
//!                                 └────── re-review ────────────┘
//! ```
//!
//! `Verified` and `Rejected` are terminal for status purposes except for an
//! explicit re-review back to `Pending`. Ownership transfer is orthogonal
//! to status and is legal only while the batch is `Verified`.
//!
//! ## Domain Invariants
//!
//! - A batch's derived status and owner always equal the fold of its
//!   transaction history; [`BatchState`] holds no independently-mutable
//!   state.
//! - Every legality rule rejects with its own [`LedgerError`] variant so
//!   callers can distinguish cause.

pub mod domain;

pub use domain::{validate, BatchState};
