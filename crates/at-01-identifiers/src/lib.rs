//! # Identifier Subsystem (at-01)
//!
//! The Identifier subsystem is the system's authority for minting batch
//! identifiers and computing record digests.
//!
//! ## Responsibilities
//!
//! - Mint collision-resistant, human-decodable batch ids
//!   (`AYUR-<yyyymmdd>-<nnn>`), re-sampling on collision and failing closed
//!   when the suffix space for a date is exhausted
//! - Compute the canonical SHA-256 digest of a transaction record, used for
//!   hash-chaining and for chain re-verification
//!
//! ## Domain Invariants
//!
//! - **Determinism**: `record_hash` is a pure function of its inputs; two
//!   calls with identical input always yield identical output.
//! - **Sensitivity**: changing any digested field (batch id, kind, actor,
//!   payload, previous hash, timestamp) changes the output.
//! - **No ambient effects**: randomness and wall-clock time enter only
//!   through the [`SuffixSource`] and [`TimeSource`] ports; the digest path
//!   touches neither.
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): id minting and canonical hashing
//! - **Ports Layer** (`ports/`): `TimeSource` and `SuffixSource` SPI traits
//! - **Adapters Layer** (`adapters/`): system clock, thread-rng suffixes,
//!   and deterministic test doubles

pub mod adapters;
pub mod domain;
pub mod ports;

pub use domain::{record_hash, BatchIdGenerator, IdError, SUFFIX_SPACE};
pub use ports::{SuffixSource, TimeSource};

pub use adapters::{FixedTimeSource, RandomSuffixSource, SequentialSuffixSource, SystemTimeSource};
