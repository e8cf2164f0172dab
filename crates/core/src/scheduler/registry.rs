//! Task registration and the scheduler context object.
//!
//! The scheduler is an explicit context object owned by the caller rather
//! than process-wide static state: every operation takes `&mut self`, so
//! multiple independent scheduler instances can coexist and tests need no
//! global reset.
//!
//! Callbacks are registered as `&mut dyn FnMut()` — anything invocable with
//! no arguments and no return value, including closures with bound state.
//! The registry borrows each callback for its entire registered lifetime but
//! does not own or manage what the callback touches.

use super::types::{SchedulerError, TaskId, TaskState};
use heapless::Vec;

/// Maximum number of tasks that can be registered.
///
/// Fixed compile-time bound; exceeding it is a registration failure, never
/// a crash.
pub const MAX_TASKS: usize = 8;

/// One registered task descriptor.
pub(crate) struct Task<'a> {
    /// The task body; invoked synchronously to completion on each fire
    pub(crate) callback: &'a mut (dyn FnMut() + 'a),
    /// Requested re-fire interval in ms; immutable once registered
    pub(crate) period_ms: u32,
    /// Countdown in ms; invariant: 0 <= time_left_ms <= period_ms
    pub(crate) time_left_ms: u32,
    pub(crate) state: TaskState,
    pub(crate) run_count: u64,
    pub(crate) runtime_us: u64,
}

/// Cooperative fixed-priority periodic scheduler.
///
/// Holds a fixed-capacity task table plus the run accumulators
/// (`total_ticks`, `active_ticks`). Dispatch order is registration order;
/// there is exactly one logical thread of control, so no locking is needed.
pub struct Scheduler<'a> {
    pub(crate) tasks: Vec<Task<'a>, MAX_TASKS>,
    pub(crate) total_ticks: u64,
    pub(crate) active_ticks: u64,
}

impl<'a> Scheduler<'a> {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            total_ticks: 0,
            active_ticks: 0,
        }
    }

    /// Resets the scheduler to its freshly constructed state.
    ///
    /// Drops every registered task and zeroes the run accumulators.
    /// Idempotent; safe to call before any run.
    pub fn init(&mut self) {
        self.tasks.clear();
        self.total_ticks = 0;
        self.active_ticks = 0;
    }

    /// Registers a task with the given period.
    ///
    /// On success the task starts in [`TaskState::Ready`] with a full
    /// countdown (`time_left_ms = period_ms`), so its first fire happens
    /// `period_ms` ticks after registration.
    ///
    /// # Errors
    ///
    /// - [`SchedulerError::CapacityExceeded`] if the table already holds
    ///   [`MAX_TASKS`] tasks; no descriptor is mutated
    /// - [`SchedulerError::InvalidPeriod`] if `period_ms == 0`
    pub fn add(
        &mut self,
        callback: &'a mut (dyn FnMut() + 'a),
        period_ms: u32,
    ) -> Result<TaskId, SchedulerError> {
        if period_ms == 0 {
            return Err(SchedulerError::InvalidPeriod);
        }
        let id = self.tasks.len();
        self.tasks
            .push(Task {
                callback,
                period_ms,
                time_left_ms: period_ms,
                state: TaskState::Ready,
                run_count: 0,
                runtime_us: 0,
            })
            .map_err(|_| SchedulerError::CapacityExceeded)?;
        Ok(id)
    }

    /// Makes a task eligible for countdown and dispatch again.
    ///
    /// The countdown resumes from whatever `time_left_ms` the task held when
    /// it was disabled; missed fires are never backfilled.
    pub fn enable(&mut self, id: TaskId) -> Result<(), SchedulerError> {
        let task = self
            .tasks
            .get_mut(id)
            .ok_or(SchedulerError::UnknownTaskId)?;
        task.state = TaskState::Ready;
        Ok(())
    }

    /// Freezes a task: the tick engine stops decrementing its countdown and
    /// the dispatcher skips it regardless of `time_left_ms`.
    pub fn disable(&mut self, id: TaskId) -> Result<(), SchedulerError> {
        let task = self
            .tasks
            .get_mut(id)
            .ok_or(SchedulerError::UnknownTaskId)?;
        task.state = TaskState::Disabled;
        Ok(())
    }

    /// Number of registered tasks, including disabled ones.
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Current state of a task, or `None` for an unregistered index.
    pub fn task_state(&self, id: TaskId) -> Option<TaskState> {
        self.tasks.get(id).map(|t| t.state)
    }
}

impl Default for Scheduler<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut a = || {};
        let mut b = || {};
        let mut sched = Scheduler::new();

        assert_eq!(sched.add(&mut a, 100), Ok(0));
        assert_eq!(sched.add(&mut b, 250), Ok(1));
        assert_eq!(sched.count(), 2);
    }

    #[test]
    fn test_add_rejects_zero_period() {
        let mut cb = || {};
        let mut sched = Scheduler::new();

        assert_eq!(sched.add(&mut cb, 0), Err(SchedulerError::InvalidPeriod));
        assert_eq!(sched.count(), 0);
    }

    #[test]
    fn test_add_rejects_beyond_capacity() {
        let mut callbacks = [(); MAX_TASKS + 1].map(|_| || {});
        let mut sched = Scheduler::new();

        let mut results = heapless::Vec::<_, { MAX_TASKS + 1 }>::new();
        for cb in callbacks.iter_mut() {
            results.push(sched.add(cb, 10)).unwrap();
        }

        for (i, result) in results.iter().enumerate().take(MAX_TASKS) {
            assert_eq!(*result, Ok(i));
        }
        assert_eq!(results[MAX_TASKS], Err(SchedulerError::CapacityExceeded));
        assert_eq!(sched.count(), MAX_TASKS);
    }

    #[test]
    fn test_enable_disable_transitions() {
        let mut cb = || {};
        let mut sched = Scheduler::new();
        let id = sched.add(&mut cb, 10).unwrap();

        assert_eq!(sched.task_state(id), Some(TaskState::Ready));
        sched.disable(id).unwrap();
        assert_eq!(sched.task_state(id), Some(TaskState::Disabled));
        sched.enable(id).unwrap();
        assert_eq!(sched.task_state(id), Some(TaskState::Ready));
    }

    #[test]
    fn test_enable_disable_unknown_id() {
        let mut cb = || {};
        let mut sched = Scheduler::new();
        sched.add(&mut cb, 10).unwrap();

        assert_eq!(sched.enable(5), Err(SchedulerError::UnknownTaskId));
        assert_eq!(sched.disable(5), Err(SchedulerError::UnknownTaskId));
    }

    #[test]
    fn test_init_is_idempotent() {
        let mut cb = || {};
        let mut sched = Scheduler::new();
        sched.add(&mut cb, 10).unwrap();

        sched.init();
        assert_eq!(sched.count(), 0);
        assert_eq!(sched.total_ticks(), 0);

        sched.init();
        assert_eq!(sched.count(), 0);
        assert_eq!(sched.total_ticks(), 0);
    }

    #[test]
    fn test_count_includes_disabled_tasks() {
        let mut a = || {};
        let mut b = || {};
        let mut sched = Scheduler::new();
        sched.add(&mut a, 10).unwrap();
        let id = sched.add(&mut b, 20).unwrap();

        sched.disable(id).unwrap();
        assert_eq!(sched.count(), 2);
    }
}
