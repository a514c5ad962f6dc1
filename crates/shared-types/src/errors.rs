//! # Error Taxonomy
//!
//! Typed rejections for every domain rule the ledger enforces. The UI
//! collaborator maps each variant to a distinct toast message, so a
//! catch-all variant is deliberately absent.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{BatchId, BatchStatus, Identity, Role};

/// Errors returned by ledger operations.
///
/// All validation errors are recoverable values: `append` never leaves
/// partial state behind, and the caller decides whether to retry with
/// corrected input. `ChainIntegrityViolation` is the exception: it is only
/// produced by chain verification and indicates tampering with stored
/// records, which is fatal to trust rather than retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// No chain exists for this batch id.
    #[error("unknown batch: {batch_id}")]
    UnknownBatch { batch_id: BatchId },

    /// A chain already exists for this batch id.
    #[error("batch {batch_id} is already registered")]
    DuplicateRegistration { batch_id: BatchId },

    /// Only the verifying role may change a batch's status.
    #[error("{actor} ({role}) is not allowed to review batches")]
    IllegalStatusActor { actor: Identity, role: Role },

    /// The requested status equals the current one.
    #[error("batch {batch_id} already has status {status}")]
    StatusUnchanged {
        batch_id: BatchId,
        status: BatchStatus,
    },

    /// A reviewed batch can only be re-opened, not moved between terminal
    /// statuses directly.
    #[error("batch {batch_id} cannot go from {from} to {to} without re-review")]
    IllegalStatusTransition {
        batch_id: BatchId,
        from: BatchStatus,
        to: BatchStatus,
    },

    /// A batch must pass quality review before it can move down the chain.
    #[error("batch {batch_id} is {status}, not verified; transfer refused")]
    NotVerifiedForTransfer {
        batch_id: BatchId,
        status: BatchStatus,
    },

    /// The transferring actor does not hold the batch. Also the outcome a
    /// racing transfer observes after losing to a concurrent commit.
    #[error("{actor} is not the current owner of batch {batch_id}")]
    NotCurrentOwner { batch_id: BatchId, actor: Identity },

    /// Transfer target equals the current owner.
    #[error("batch {batch_id} is already owned by {owner}")]
    SelfTransfer { batch_id: BatchId, owner: Identity },

    /// Transfer target identity is empty.
    #[error("transfer recipient for batch {batch_id} must not be empty")]
    EmptyRecipient { batch_id: BatchId },

    /// Registration quantity must be a positive finite number.
    #[error("quantity must be positive, got {amount}")]
    InvalidQuantity { amount: f64 },

    /// Identifier minting kept colliding with existing chains and gave up.
    #[error("no unique batch id found after {attempts} attempts")]
    IdExhausted { attempts: u32 },

    /// A stored record's hash link no longer verifies. Indicates external
    /// tampering or corruption; never produced by `append`.
    #[error("chain integrity violation for batch {batch_id} at record #{seq}")]
    ChainIntegrityViolation { batch_id: BatchId, seq: u64 },
}

impl LedgerError {
    /// The batch this error concerns, where one is known.
    pub fn batch_id(&self) -> Option<&BatchId> {
        match self {
            Self::UnknownBatch { batch_id }
            | Self::DuplicateRegistration { batch_id }
            | Self::StatusUnchanged { batch_id, .. }
            | Self::IllegalStatusTransition { batch_id, .. }
            | Self::NotVerifiedForTransfer { batch_id, .. }
            | Self::NotCurrentOwner { batch_id, .. }
            | Self::SelfTransfer { batch_id, .. }
            | Self::EmptyRecipient { batch_id }
            | Self::ChainIntegrityViolation { batch_id, .. } => Some(batch_id),
            Self::IllegalStatusActor { .. }
            | Self::InvalidQuantity { .. }
            | Self::IdExhausted { .. } => None,
        }
    }

    pub fn error_type(&self) -> LedgerErrorType {
        match self {
            Self::UnknownBatch { .. } => LedgerErrorType::UnknownBatch,
            Self::DuplicateRegistration { .. } => LedgerErrorType::DuplicateRegistration,
            Self::IllegalStatusActor { .. } => LedgerErrorType::IllegalStatusActor,
            Self::StatusUnchanged { .. } => LedgerErrorType::StatusUnchanged,
            Self::IllegalStatusTransition { .. } => LedgerErrorType::IllegalStatusTransition,
            Self::NotVerifiedForTransfer { .. } => LedgerErrorType::NotVerifiedForTransfer,
            Self::NotCurrentOwner { .. } => LedgerErrorType::NotCurrentOwner,
            Self::SelfTransfer { .. } => LedgerErrorType::SelfTransfer,
            Self::EmptyRecipient { .. } => LedgerErrorType::EmptyRecipient,
            Self::InvalidQuantity { .. } => LedgerErrorType::InvalidQuantity,
            Self::IdExhausted { .. } => LedgerErrorType::IdExhausted,
            Self::ChainIntegrityViolation { .. } => LedgerErrorType::ChainIntegrityViolation,
        }
    }
}

/// Serializable error mirror for display collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerErrorPayload {
    pub error_type: LedgerErrorType,
    pub message: String,
    pub batch_id: Option<BatchId>,
}

impl From<&LedgerError> for LedgerErrorPayload {
    fn from(err: &LedgerError) -> Self {
        Self {
            error_type: err.error_type(),
            message: err.to_string(),
            batch_id: err.batch_id().cloned(),
        }
    }
}

/// Error kind enumeration for serialization and message lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerErrorType {
    UnknownBatch,
    DuplicateRegistration,
    IllegalStatusActor,
    StatusUnchanged,
    IllegalStatusTransition,
    NotVerifiedForTransfer,
    NotCurrentOwner,
    SelfTransfer,
    EmptyRecipient,
    InvalidQuantity,
    IdExhausted,
    ChainIntegrityViolation,
}
