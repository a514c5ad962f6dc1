//! # Trace Query Domain

mod report;

pub use report::{TraceEvent, TraceReport};
