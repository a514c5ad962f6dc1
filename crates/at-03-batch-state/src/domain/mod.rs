//! # Batch State Domain

mod state;
mod transitions;

pub use state::BatchState;
pub use transitions::validate;
