//! # Outbound Ports (Driven Ports)
//!
//! The environment-facing seams of the identifier subsystem. Production
//! adapters wrap the system clock and a thread-local RNG; tests substitute
//! deterministic implementations so minting and timestamping are
//! reproducible.

use shared_types::Timestamp;

/// Source of the current time.
pub trait TimeSource: Send + Sync {
    /// Current Unix time in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Source of raw id suffixes.
///
/// Implementations need not avoid repeats; the generator re-samples on
/// collision against existing ledger ids.
pub trait SuffixSource: Send {
    /// Sample a suffix in `[0, space)`.
    fn sample(&mut self, space: u32) -> u32;
}
