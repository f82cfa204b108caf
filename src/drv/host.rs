use std::time::Instant;

use crate::Clock;

/// A clock backed by [`std::time::Instant`], for tickers running in a host
/// process.
///
/// Counters measure from the moment of construction and truncate to `u32`,
/// wrapping exactly like an embedded tick counter.
pub struct HostClock {
    origin: Instant,
}

impl HostClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for HostClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for HostClock {
    fn micros(&self) -> u32 {
        self.origin.elapsed().as_micros() as u32
    }

    fn millis(&self) -> u32 {
        self.origin.elapsed().as_millis() as u32
    }
}
