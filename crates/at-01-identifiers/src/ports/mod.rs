//! # Ports
//!
//! Outbound SPI traits through which the domain reaches the environment.

mod outbound;

pub use outbound::{SuffixSource, TimeSource};
