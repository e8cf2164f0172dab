//! Core types for the task scheduler.

use core::fmt;

use heapless::Vec;

use super::registry::MAX_TASKS;

/// Stable task identifier: the registration index.
///
/// Indices are assigned in registration order and never reused within a run.
pub type TaskId = usize;

/// Lifecycle state of a registered task.
///
/// An unregistered slot holds no descriptor at all, so there is no "unused"
/// variant: every descriptor in the table is `Ready`, `Running`, or
/// `Disabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Eligible for countdown and dispatch.
    Ready,
    /// Callback currently executing (transient, within one dispatch pass).
    Running,
    /// Countdown frozen; skipped by tick engine and dispatcher.
    Disabled,
}

/// Errors from scheduler registration and control operations.
///
/// None of these are fatal: the caller keeps a consistent scheduler and may
/// retry or drop the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    /// Task table is full; the registration was rejected without mutating
    /// any descriptor.
    CapacityExceeded,
    /// A zero period would fire on every tick with no throttling; rejected
    /// at registration.
    InvalidPeriod,
    /// `enable`/`disable` addressed an index that was never registered.
    UnknownTaskId,
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerError::CapacityExceeded => write!(f, "task table full"),
            SchedulerError::InvalidPeriod => write!(f, "task period must be at least 1 ms"),
            SchedulerError::UnknownTaskId => write!(f, "unknown task id"),
        }
    }
}

/// Per-task counters captured at reporting time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSnapshot {
    /// Registration index
    pub id: TaskId,
    /// Requested re-fire interval in milliseconds
    pub period_ms: u32,
    /// Completed invocations since the scheduler was initialized
    pub run_count: u64,
    /// Cumulative wall-clock execution time in microseconds
    pub runtime_us: u64,
}

/// Termination report for a bounded or unbounded run.
///
/// Quantities follow the run-statistics definitions: `total_ticks` counts
/// every tick of the run, `active_ticks` counts ticks where at least one
/// task fired.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Ticks elapsed during the run
    pub total_ticks: u64,
    /// Ticks during which at least one task fired
    pub active_ticks: u64,
    /// Per-task counters, in registration order
    pub tasks: Vec<TaskSnapshot, MAX_TASKS>,
}

impl RunReport {
    /// CPU load as the percentage of ticks with at least one fire.
    ///
    /// Defined as 0.0 for an empty run (`total_ticks == 0`).
    pub fn cpu_load(&self) -> f32 {
        if self.total_ticks == 0 {
            0.0
        } else {
            self.active_ticks as f32 * 100.0 / self.total_ticks as f32
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Run complete. Ticks: {} | Active ticks: {} | CPU load: {:.2}%",
            self.total_ticks,
            self.active_ticks,
            self.cpu_load()
        )?;
        for task in &self.tasks {
            writeln!(
                f,
                "Task {}: period={}ms runs={} total_runtime={:.3}ms",
                task.id,
                task.period_ms,
                task.run_count,
                task.runtime_us as f64 / 1e3
            )?;
        }
        Ok(())
    }
}
