//! # Identifier Errors

use thiserror::Error;

/// Failures while minting a batch identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdError {
    /// Every sampled suffix collided with an existing id. The caller must
    /// surface this rather than reuse an id; minting fails closed.
    #[error("suffix space exhausted after {attempts} attempts")]
    SuffixSpaceExhausted { attempts: u32 },
}
