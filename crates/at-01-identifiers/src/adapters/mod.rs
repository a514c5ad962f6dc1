//! # Adapters
//!
//! Concrete implementations of the time and suffix ports.

mod suffix;
mod time;

pub use suffix::{RandomSuffixSource, SequentialSuffixSource};
pub use time::{FixedTimeSource, SystemTimeSource};
