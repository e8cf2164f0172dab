//! Time abstraction for measuring task execution duration.
//!
//! The scheduler never reads a clock directly; a `TimeSource` is injected
//! into the dispatch path so the same core runs against a monotonic host
//! clock, a hardware timer, or a fully controllable mock.

use core::cell::Cell;

/// Platform-agnostic monotonic time source.
///
/// Implementations:
/// - `HostTime` (in the sim crate) backed by `std::time::Instant`
/// - [`MockTime`] for host testing with controllable time
///
/// # Example
///
/// ```
/// use tickwheel_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// let start = time.now_us();
/// time.advance(250);
/// assert_eq!(time.elapsed_since(start), 250);
/// ```
pub trait TimeSource {
    /// Returns current time in microseconds since an arbitrary epoch.
    fn now_us(&self) -> u64;

    /// Returns elapsed time in microseconds since a reference point.
    ///
    /// Uses saturating subtraction so a stale reference never underflows.
    fn elapsed_since(&self, reference_us: u64) -> u64 {
        self.now_us().saturating_sub(reference_us)
    }
}

/// Mock time source with manually advanced time.
///
/// Time only moves when the test calls [`MockTime::advance`] or
/// [`MockTime::set`], which makes execution-time accounting fully
/// deterministic: a test callback that advances the clock by N microseconds
/// is recorded as having run for exactly N microseconds.
#[derive(Clone, Default)]
pub struct MockTime {
    current_us: Cell<u64>,
}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub fn new() -> Self {
        Self {
            current_us: Cell::new(0),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, us: u64) {
        self.current_us.set(us);
    }

    /// Advances the current time by the specified number of microseconds.
    pub fn advance(&self, us: u64) {
        self.current_us.set(self.current_us.get() + us);
    }
}

impl TimeSource for MockTime {
    fn now_us(&self) -> u64 {
        self.current_us.get()
    }
}
