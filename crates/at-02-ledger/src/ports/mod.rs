//! # Ports

mod inbound;

pub use inbound::LedgerApi;
