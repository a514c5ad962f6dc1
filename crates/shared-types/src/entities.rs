//! # Core Domain Entities
//!
//! Defines the entities of the provenance ledger.
//!
//! ## Clusters
//!
//! - **Identity**: `BatchId`, `Identity`, `Role`
//! - **Harvest**: `HerbType`, `Quantity`, `Unit`, `GeoPoint`
//! - **Ledger**: `TransactionKind`, `TransactionPayload`,
//!   `TransactionRequest`, `TransactionRecord`
//! - **Views**: `Batch`, `QrPayload`

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte SHA-256 digest.
pub type Hash = [u8; 32];

/// Sentinel `prev_hash` for the first record of a batch's chain (all zeros).
pub const SENTINEL_HASH: Hash = [0u8; 32];

/// Unix timestamp in milliseconds since epoch.
pub type Timestamp = u64;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Unique identifier for a batch, e.g. `AYUR-20240115-042`.
///
/// Encodes the UTC registration date; immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BatchId(String);

impl BatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BatchId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BatchId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The identity of an actor in the supply chain, e.g. `farmer-1`.
///
/// Opaque to the ledger; authentication is the calling collaborator's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Supply-chain roles. `Distributor` is the verifying role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Distributor,
    Retailer,
    Consumer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Distributor => "distributor",
            Self::Retailer => "retailer",
            Self::Consumer => "consumer",
        }
    }

    /// Whether this role may verify or reject batches.
    pub fn can_review(&self) -> bool {
        matches!(self, Self::Distributor)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// CLUSTER B: HARVEST
// =============================================================================

/// The fixed herb catalog offered by the registration form.
pub const HERB_CATALOG: [&str; 8] = [
    "Ashwagandha",
    "Turmeric",
    "Brahmi",
    "Neem",
    "Tulsi",
    "Amla",
    "Giloy",
    "Shatavari",
];

/// A herb variety. Treated as opaque by the ledger; catalog membership is
/// surfaced for callers that want to validate form input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HerbType(String);

impl HerbType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_cataloged(&self) -> bool {
        HERB_CATALOG.contains(&self.0.as_str())
    }
}

impl fmt::Display for HerbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HerbType {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for HerbType {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Unit of measure for batch quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    Tons,
    Lbs,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Tons => "tons",
            Self::Lbs => "lbs",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positive quantity with its unit of measure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub amount: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(amount: f64, unit: Unit) -> Self {
        Self { amount, unit }
    }

    pub fn kg(amount: f64) -> Self {
        Self::new(amount, Unit::Kg)
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0.0 && self.amount.is_finite()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

/// Harvest location captured by the farmer's device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    /// Reverse-geocoded address, as provided by the capturing collaborator.
    pub address: String,
}

// =============================================================================
// CLUSTER C: LEDGER
// =============================================================================

/// Review status of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Pending,
    Verified,
    Rejected,
}

impl BatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of event a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Registered,
    Transferred,
    StatusChanged,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Transferred => "transferred",
            Self::StatusChanged => "status-changed",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific data carried by a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TransactionPayload {
    /// A new harvest entering the system.
    Registered {
        herb_type: HerbType,
        quantity: Quantity,
        /// GPS fix recorded at harvest time, if the device provided one.
        origin: Option<GeoPoint>,
        notes: Option<String>,
    },
    /// Ownership moving to the next party in the chain.
    Transferred {
        new_owner: Identity,
        new_owner_role: Role,
        notes: Option<String>,
    },
    /// Review outcome (verify, reject, or re-open for review).
    StatusChanged {
        new_status: BatchStatus,
        notes: Option<String>,
    },
}

impl TransactionPayload {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Registered { .. } => TransactionKind::Registered,
            Self::Transferred { .. } => TransactionKind::Transferred,
            Self::StatusChanged { .. } => TransactionKind::StatusChanged,
        }
    }
}

/// A request to append one transaction, as built by the form/view layer.
///
/// `batch_id` is `None` exactly when the ledger should mint a fresh
/// identifier (registration). Field-level input sanitization (trimming,
/// required-field checks) is the caller's responsibility; the ledger
/// enforces domain legality only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub batch_id: Option<BatchId>,
    pub actor: Identity,
    pub actor_role: Role,
    pub payload: TransactionPayload,
}

impl TransactionRequest {
    /// Registration with a ledger-minted batch id.
    pub fn register(actor: impl Into<Identity>, herb_type: impl Into<HerbType>, quantity: Quantity) -> Self {
        Self {
            batch_id: None,
            actor: actor.into(),
            actor_role: Role::Farmer,
            payload: TransactionPayload::Registered {
                herb_type: herb_type.into(),
                quantity,
                origin: None,
                notes: None,
            },
        }
    }

    /// Registration under a caller-supplied batch id.
    pub fn register_with_id(
        batch_id: impl Into<BatchId>,
        actor: impl Into<Identity>,
        herb_type: impl Into<HerbType>,
        quantity: Quantity,
    ) -> Self {
        Self {
            batch_id: Some(batch_id.into()),
            ..Self::register(actor, herb_type, quantity)
        }
    }

    pub fn transfer(
        batch_id: impl Into<BatchId>,
        actor: impl Into<Identity>,
        actor_role: Role,
        new_owner: impl Into<Identity>,
        new_owner_role: Role,
    ) -> Self {
        Self {
            batch_id: Some(batch_id.into()),
            actor: actor.into(),
            actor_role,
            payload: TransactionPayload::Transferred {
                new_owner: new_owner.into(),
                new_owner_role,
                notes: None,
            },
        }
    }

    pub fn status_change(
        batch_id: impl Into<BatchId>,
        actor: impl Into<Identity>,
        actor_role: Role,
        new_status: BatchStatus,
    ) -> Self {
        Self {
            batch_id: Some(batch_id.into()),
            actor: actor.into(),
            actor_role,
            payload: TransactionPayload::StatusChanged {
                new_status,
                notes: None,
            },
        }
    }

    pub fn with_notes(mut self, text: impl Into<String>) -> Self {
        let notes = match &mut self.payload {
            TransactionPayload::Registered { notes, .. } => notes,
            TransactionPayload::Transferred { notes, .. } => notes,
            TransactionPayload::StatusChanged { notes, .. } => notes,
        };
        *notes = Some(text.into());
        self
    }

    pub fn kind(&self) -> TransactionKind {
        self.payload.kind()
    }
}

/// One committed ledger entry.
///
/// ## Invariants
///
/// - `seq` is the ledger-global sequence number, strictly increasing.
/// - `prev_hash` equals the `hash` of the previous record for the same
///   batch, or [`SENTINEL_HASH`] for the first record, so every batch's
///   records form a singly linked chain with no branches.
/// - `hash` is the canonical digest over (`batch_id`, `kind`, `actor`,
///   `payload`, `prev_hash`, `timestamp`); re-verifying a chain must
///   reproduce every stored `hash`.
/// - `timestamp` is non-decreasing within a batch's chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub seq: u64,
    pub batch_id: BatchId,
    pub kind: TransactionKind,
    pub actor: Identity,
    pub payload: TransactionPayload,
    pub prev_hash: Hash,
    pub hash: Hash,
    pub timestamp: Timestamp,
}

// =============================================================================
// CLUSTER D: VIEWS
// =============================================================================

/// The current state of a batch, derived by folding its transaction
/// history. Never a source of truth: every field is reproducible from the
/// chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub id: BatchId,
    pub herb_type: HerbType,
    pub quantity: Quantity,
    /// The registering farmer; immutable.
    pub origin_owner: Identity,
    /// Whoever currently holds the batch; changes only via transfer.
    pub current_owner: Identity,
    pub status: BatchStatus,
    pub created_at: Timestamp,
}

/// Compact payload handed to the QR-encoding collaborator.
///
/// Sufficient to re-look-up the batch via the trace query service with no
/// additional context (the `batch_id` alone resolves it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrPayload {
    pub batch_id: BatchId,
    pub herb_type: HerbType,
    pub quantity: Quantity,
    pub registered_by: Identity,
    pub created_at: Timestamp,
}
