//! # Ports

mod inbound;

pub use inbound::TraceQueryApi;
