//! # Batch Id Generator
//!
//! Mints identifiers of the form `<PREFIX>-<yyyymmdd>-<nnn>`: a fixed
//! prefix, the UTC date of the minting instant, and a zero-padded
//! three-digit suffix.

use chrono::{DateTime, Utc};
use shared_types::{BatchId, Timestamp};

use super::errors::IdError;
use crate::ports::SuffixSource;

/// Size of the per-date suffix space (three decimal digits).
pub const SUFFIX_SPACE: u32 = 1000;

/// Mints batch identifiers.
///
/// Uniqueness within a process run comes from re-sampling the suffix until
/// the candidate does not collide with an existing ledger id. If every
/// attempt collides, minting fails with [`IdError::SuffixSpaceExhausted`]
/// instead of silently reusing an id.
#[derive(Debug, Clone)]
pub struct BatchIdGenerator {
    prefix: String,
    max_attempts: u32,
}

impl BatchIdGenerator {
    pub fn new(prefix: impl Into<String>, max_attempts: u32) -> Self {
        Self {
            prefix: prefix.into(),
            max_attempts,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Mint a fresh batch id for the given instant.
    ///
    /// `is_taken` is consulted for every candidate; the caller is expected
    /// to hold whatever lock makes that check race-free until the id is
    /// committed.
    pub fn mint<F>(
        &self,
        now: Timestamp,
        suffixes: &mut dyn SuffixSource,
        is_taken: F,
    ) -> Result<BatchId, IdError>
    where
        F: Fn(&BatchId) -> bool,
    {
        let date = utc_date_segment(now);
        for _ in 0..self.max_attempts {
            let suffix = suffixes.sample(SUFFIX_SPACE);
            let candidate = BatchId::new(format!("{}-{}-{:03}", self.prefix, date, suffix));
            if !is_taken(&candidate) {
                return Ok(candidate);
            }
        }
        Err(IdError::SuffixSpaceExhausted {
            attempts: self.max_attempts,
        })
    }
}

impl Default for BatchIdGenerator {
    fn default() -> Self {
        Self::new("AYUR", 32)
    }
}

/// UTC calendar date of a millisecond timestamp as `yyyymmdd`.
fn utc_date_segment(ts: Timestamp) -> String {
    let dt = DateTime::<Utc>::from_timestamp_millis(ts.min(i64::MAX as u64) as i64)
        .unwrap_or(DateTime::UNIX_EPOCH);
    dt.format("%Y%m%d").to_string()
}
