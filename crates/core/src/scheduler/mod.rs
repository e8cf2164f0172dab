//! Cooperative fixed-capacity task scheduler.
//!
//! A fixed set of zero-argument callbacks is registered with millisecond
//! periods; a tick-driven loop then dispatches each callback exactly once
//! per elapsed period. Ticks are simulated time: one `tick()` is one
//! millisecond, regardless of how long the host actually takes, so task
//! periods never drift relative to each other.
//!
//! # Components
//!
//! - [`types`]: Task states, errors, and run reports
//! - [`registry`]: The [`Scheduler`] context object and task registration
//! - [`dispatch`]: Tick engine and dispatcher (countdown vs. fire-and-reload)
//! - [`stats`]: Run statistics queries and report building
//! - [`runner`]: Bounded/unbounded run loops and cooperative cancellation
//!
//! # Example
//!
//! ```
//! use tickwheel_core::scheduler::Scheduler;
//! use tickwheel_core::traits::{MockTime, NoopDelay};
//!
//! let time = MockTime::new();
//! let mut blink = || { /* toggle a pin */ };
//! let mut sched = Scheduler::new();
//! let id = sched.add(&mut blink, 5).unwrap();
//!
//! let report = sched.run_for(25, &time, &mut NoopDelay);
//! assert_eq!(report.tasks[id].run_count, 5);
//! ```

pub mod dispatch;
pub mod registry;
pub mod runner;
pub mod stats;
pub mod types;

pub use registry::{Scheduler, MAX_TASKS};
pub use runner::CancelToken;
pub use types::{RunReport, SchedulerError, TaskId, TaskSnapshot, TaskState};
