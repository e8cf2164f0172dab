//! Run statistics queries and report building.
//!
//! The run controller owns the accumulators; this module exposes the
//! read side: per-task counters, tick totals, and the derived CPU load.

use super::registry::Scheduler;
use super::types::{RunReport, TaskId, TaskSnapshot};

impl Scheduler<'_> {
    /// Ticks counted since the current (or last) run started.
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Ticks where at least one task fired since the run started.
    pub fn active_ticks(&self) -> u64 {
        self.active_ticks
    }

    /// CPU load as the percentage of ticks with at least one fire.
    ///
    /// Defined as 0.0 when no ticks have been counted.
    pub fn cpu_load(&self) -> f32 {
        if self.total_ticks == 0 {
            0.0
        } else {
            self.active_ticks as f32 * 100.0 / self.total_ticks as f32
        }
    }

    /// Counters for one task, or `None` for an unregistered index.
    pub fn task_stats(&self, id: TaskId) -> Option<TaskSnapshot> {
        self.tasks.get(id).map(|task| TaskSnapshot {
            id,
            period_ms: task.period_ms,
            run_count: task.run_count,
            runtime_us: task.runtime_us,
        })
    }

    /// Builds a termination report from the current accumulators.
    pub fn report(&self) -> RunReport {
        let mut tasks = heapless::Vec::new();
        for id in 0..self.tasks.len() {
            // Capacity matches MAX_TASKS, so the push cannot fail
            if let Some(snapshot) = self.task_stats(id) {
                let _ = tasks.push(snapshot);
            }
        }
        RunReport {
            total_ticks: self.total_ticks,
            active_ticks: self.active_ticks,
            tasks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockTime, NoopDelay};
    use core::cell::Cell;

    #[test]
    fn test_task_stats_unknown_id() {
        let sched = Scheduler::new();
        assert!(sched.task_stats(0).is_none());
    }

    #[test]
    fn test_report_lists_tasks_in_registration_order() {
        let time = MockTime::new();
        let mut a = || {};
        let mut b = || {};
        let mut sched = Scheduler::new();
        sched.add(&mut a, 2).unwrap();
        sched.add(&mut b, 3).unwrap();

        let report = sched.run_for(6, &time, &mut NoopDelay);
        assert_eq!(report.tasks.len(), 2);
        assert_eq!(report.tasks[0].id, 0);
        assert_eq!(report.tasks[0].period_ms, 2);
        assert_eq!(report.tasks[0].run_count, 3);
        assert_eq!(report.tasks[1].id, 1);
        assert_eq!(report.tasks[1].run_count, 2);
    }

    #[test]
    fn test_queries_match_report_after_run() {
        let time = MockTime::new();
        let fires = Cell::new(0u32);
        let mut cb = || fires.set(fires.get() + 1);
        let mut sched = Scheduler::new();
        sched.add(&mut cb, 4).unwrap();

        let report = sched.run_for(10, &time, &mut NoopDelay);
        assert_eq!(sched.total_ticks(), report.total_ticks);
        assert_eq!(sched.active_ticks(), report.active_ticks);
        assert_eq!(sched.cpu_load(), report.cpu_load());
    }
}
