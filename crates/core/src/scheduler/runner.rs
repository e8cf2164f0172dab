//! Run controller: bounded and unbounded tick/dispatch loops.
//!
//! Both run modes compose `tick()` + `step()` with a one-tick pacing delay
//! and reset the run accumulators at entry. Cancellation is cooperative:
//! the token is checked once per iteration boundary and never interrupts a
//! callback mid-execution.

use core::sync::atomic::{AtomicBool, Ordering};

use super::registry::Scheduler;
use super::types::RunReport;
use crate::traits::{TickDelay, TimeSource};

/// Cooperative cancellation flag for unbounded runs.
///
/// An explicit stop flag the host application controls, instead of an OS
/// signal handler. `cancel()` may be called from any thread; the run loop
/// observes it at the next iteration boundary.
///
/// # Example
///
/// ```
/// use tickwheel_core::scheduler::CancelToken;
///
/// static CANCEL: CancelToken = CancelToken::new();
///
/// assert!(!CANCEL.is_cancelled());
/// CANCEL.cancel();
/// assert!(CANCEL.is_cancelled());
/// ```
pub struct CancelToken {
    cancelled: AtomicBool,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state (const for statics).
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
        }
    }

    /// Requests cancellation; takes effect after the in-flight tick/dispatch
    /// pass completes.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Scheduler<'a> {
    /// Executes exactly `duration_ms` tick/dispatch iterations and returns
    /// the termination report.
    ///
    /// Run statistics are reset to zero at entry, so back-to-back runs
    /// report independently.
    pub fn run_for<T, D>(&mut self, duration_ms: u32, time: &T, delay: &mut D) -> RunReport
    where
        T: TimeSource,
        D: TickDelay,
    {
        self.total_ticks = 0;
        self.active_ticks = 0;

        for _ in 0..duration_ms {
            self.advance(time, delay);
        }

        self.report()
    }

    /// Executes until `cancel` is observed set, then returns the
    /// termination report.
    ///
    /// The token is checked between iterations only; a pass that has started
    /// always completes, and no further ticks are issued afterwards.
    pub fn run<T, D>(&mut self, time: &T, delay: &mut D, cancel: &CancelToken) -> RunReport
    where
        T: TimeSource,
        D: TickDelay,
    {
        self.total_ticks = 0;
        self.active_ticks = 0;

        while !cancel.is_cancelled() {
            self.advance(time, delay);
        }

        self.report()
    }

    /// One run-loop iteration: advance countdowns, dispatch due tasks, pace
    /// out the simulated millisecond, and account the tick.
    fn advance<T, D>(&mut self, time: &T, delay: &mut D)
    where
        T: TimeSource,
        D: TickDelay,
    {
        self.tick();
        if self.step(time) {
            self.active_ticks += 1;
        }
        delay.delay_tick();
        self.total_ticks += 1;
    }
}
