//! # Shared Types Crate
//!
//! This crate contains all domain entities and the `LedgerError` taxonomy
//! shared across the AyurTrace subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Records over state**: `TransactionRecord` is the authoritative unit;
//!   `Batch` is a derived view and is never mutated directly.
//! - **Typed rejections**: Every domain rule violation has its own
//!   `LedgerError` variant so callers can distinguish cause.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
