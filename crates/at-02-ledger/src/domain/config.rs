//! # Ledger Configuration

use serde::{Deserialize, Serialize};

/// Construction parameters for a ledger instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Fixed prefix of minted batch ids (default: `AYUR`).
    pub id_prefix: String,
    /// Attempts before id minting fails closed (default: 32).
    pub max_id_attempts: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            id_prefix: "AYUR".to_string(),
            max_id_attempts: 32,
        }
    }
}
