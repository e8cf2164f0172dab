//! Monotonic host clock and wall-time tick pacing.

use std::thread;
use std::time::{Duration, Instant};

use tickwheel_core::traits::{TickDelay, TimeSource};

/// Monotonic time source backed by `std::time::Instant`.
///
/// Microseconds are counted from construction.
#[derive(Debug, Clone)]
pub struct HostTime {
    start: Instant,
}

impl HostTime {
    /// Creates a time source anchored at the current instant.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for HostTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for HostTime {
    fn now_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

/// Tick pacing that sleeps one millisecond of wall time per tick.
#[derive(Debug, Clone)]
pub struct HostDelay {
    tick: Duration,
}

impl HostDelay {
    /// Creates the standard 1 ms-per-tick pacing.
    pub fn new() -> Self {
        Self {
            tick: Duration::from_millis(1),
        }
    }
}

impl Default for HostDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl TickDelay for HostDelay {
    fn delay_tick(&mut self) {
        thread::sleep(self.tick);
    }
}
