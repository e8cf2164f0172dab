//! Tick engine and dispatcher.
//!
//! The two halves are deliberately separate: `tick()` only decrements
//! countdowns, and `step()` only consumes countdowns that have reached zero
//! (fire, then reload). Because a reload always restarts from `period_ms`,
//! each task's effective period is exactly `period_ms` ticks no matter how
//! many other tasks fire on the same tick.

use super::registry::Scheduler;
use super::types::TaskState;
use crate::traits::TimeSource;

impl Scheduler<'_> {
    /// Advances simulated time by one millisecond.
    ///
    /// Decrements `time_left_ms` for every `Ready` task that has not yet
    /// reached zero. `Running` and `Disabled` tasks are untouched, and a
    /// countdown already at zero stays at zero until the dispatcher consumes
    /// it.
    pub fn tick(&mut self) {
        for task in self.tasks.iter_mut() {
            if task.state == TaskState::Ready && task.time_left_ms > 0 {
                task.time_left_ms -= 1;
            }
        }
    }

    /// Runs one dispatch pass; intended to follow each `tick()`.
    ///
    /// Fires every task that is `Ready` with an expired countdown, in
    /// registration order: the lower-index callback completes fully before
    /// the next one starts. Each fire is timed through the injected
    /// [`TimeSource`] and accounted in the task's `run_count` and
    /// `runtime_us`, then the countdown reloads to `period_ms`.
    ///
    /// Returns whether at least one task fired during this pass.
    pub fn step<T: TimeSource>(&mut self, time: &T) -> bool {
        let mut fired = false;

        for task in self.tasks.iter_mut() {
            if task.state != TaskState::Ready || task.time_left_ms > 0 {
                continue;
            }

            task.state = TaskState::Running;
            let start_us = time.now_us();
            (task.callback)();
            let elapsed_us = time.elapsed_since(start_us);

            task.run_count += 1;
            task.runtime_us += elapsed_us;
            task.time_left_ms = task.period_ms;
            task.state = TaskState::Ready;
            fired = true;
        }

        fired
    }
}
