//! # Provenance Index Domain

mod index;

pub use index::ProvenanceIndex;
