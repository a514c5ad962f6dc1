//! # Time Adapters

use shared_types::Timestamp;

use crate::ports::TimeSource;

/// Default time source using system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Fixed time source for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub Timestamp);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        self.0
    }
}
