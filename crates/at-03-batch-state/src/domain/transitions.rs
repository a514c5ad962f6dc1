//! # Transition Legality
//!
//! The single place where append legality is decided. Evaluated against the
//! batch's derived state before any record is written, under the ledger's
//! append lock, so the checked state cannot go stale mid-append.

use shared_types::{BatchId, BatchStatus, Identity, LedgerError, Role, TransactionPayload};

use super::state::BatchState;

/// Check whether a request may legally extend the batch's chain.
///
/// ## Legality Rules
///
/// - `Registered`: no chain may exist for the id; quantity must be a
///   positive finite number.
/// - `StatusChanged`: only the verifying role; the target status must
///   differ from the current one; a reviewed batch may only be re-opened
///   to `Pending`, never moved between `Verified` and `Rejected` directly.
/// - `Transferred`: batch must be `Verified`; the actor must be the
///   current owner; the recipient must be non-empty and distinct from the
///   current owner.
/// - Any non-registration against an unknown id is `UnknownBatch`.
pub fn validate(
    batch_id: &BatchId,
    current: Option<&BatchState>,
    actor: &Identity,
    actor_role: Role,
    payload: &TransactionPayload,
) -> Result<(), LedgerError> {
    match payload {
        TransactionPayload::Registered { quantity, .. } => {
            if current.is_some() {
                return Err(LedgerError::DuplicateRegistration {
                    batch_id: batch_id.clone(),
                });
            }
            if !quantity.is_positive() {
                return Err(LedgerError::InvalidQuantity {
                    amount: quantity.amount,
                });
            }
            Ok(())
        }

        TransactionPayload::StatusChanged { new_status, .. } => {
            let state = current.ok_or_else(|| LedgerError::UnknownBatch {
                batch_id: batch_id.clone(),
            })?;
            if !actor_role.can_review() {
                return Err(LedgerError::IllegalStatusActor {
                    actor: actor.clone(),
                    role: actor_role,
                });
            }
            if *new_status == state.status {
                return Err(LedgerError::StatusUnchanged {
                    batch_id: batch_id.clone(),
                    status: state.status,
                });
            }
            if !status_transition_legal(state.status, *new_status) {
                return Err(LedgerError::IllegalStatusTransition {
                    batch_id: batch_id.clone(),
                    from: state.status,
                    to: *new_status,
                });
            }
            Ok(())
        }

        TransactionPayload::Transferred { new_owner, .. } => {
            let state = current.ok_or_else(|| LedgerError::UnknownBatch {
                batch_id: batch_id.clone(),
            })?;
            if state.status != BatchStatus::Verified {
                return Err(LedgerError::NotVerifiedForTransfer {
                    batch_id: batch_id.clone(),
                    status: state.status,
                });
            }
            if *actor != state.current_owner {
                return Err(LedgerError::NotCurrentOwner {
                    batch_id: batch_id.clone(),
                    actor: actor.clone(),
                });
            }
            if new_owner.is_empty() {
                return Err(LedgerError::EmptyRecipient {
                    batch_id: batch_id.clone(),
                });
            }
            if new_owner == &state.current_owner {
                return Err(LedgerError::SelfTransfer {
                    batch_id: batch_id.clone(),
                    owner: state.current_owner.clone(),
                });
            }
            Ok(())
        }
    }
}

/// Status transition table. `Pending` may be reviewed either way; reviewed
/// statuses may only be re-opened.
fn status_transition_legal(from: BatchStatus, to: BatchStatus) -> bool {
    use BatchStatus::{Pending, Rejected, Verified};
    matches!(
        (from, to),
        (Pending, Verified) | (Pending, Rejected) | (Verified, Pending) | (Rejected, Pending)
    )
}
